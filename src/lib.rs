//! # gita-gen
//!
//! Data core and build CLI for a static Bhagavad Gita study site. The text
//! is fixed — 18 chapters, 700 verses — so the whole site is enumerable up
//! front: every page address, every navigation link, and every verse's video
//! coverage are pure computations over a compiled-in chapter catalog.
//!
//! The presentation layer (HTML, styling) lives elsewhere and consumes what
//! this crate produces: the route list for static generation, the sitemap,
//! per-verse previous/next links, the verse text store, and the per-language
//! video index.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | The static 18-chapter table: titles, verse counts, descriptions |
//! | [`address`] | Verse addressing and linear previous/next adjacency across chapters |
//! | [`videos`] | Per-language verse video index built from raw JSON catalogs |
//! | [`routes`] | Full route enumeration and sitemap XML |
//! | [`content`] | File-backed verse text store (sanskrit/romanized/english/word-by-word) |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting — pure `format_*` + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Absence Is a Value, Not an Error
//!
//! Lookups never fail: an unknown chapter is `None`, an invalid address is
//! `false`, a verse without video coverage is an empty map. Errors are
//! reserved for broken inputs the operator must fix (unreadable catalog
//! files, bad config). The presentation layer maps absence to not-found
//! pages.
//!
//! ## Best-Effort Video Indexing
//!
//! Video catalogs are free-text YouTube titles; the only machine-readable
//! link to the text is a `"chapter.verse"` substring. Records that don't
//! parse are skipped rather than failing the build — a missing video is a
//! gap, not a defect. The extraction lives behind one named function
//! ([`videos::parse_verse_ref`]) so the policy is centralized and testable.
//!
//! ## Deterministic Enumeration
//!
//! [`address::all_verse_keys`] and [`routes::generate_all_routes`] walk the
//! catalog in the same chapter-then-verse order, so manifests and the
//! sitemap are byte-stable between builds and diffs stay meaningful.

pub mod address;
pub mod catalog;
pub mod config;
pub mod content;
pub mod output;
pub mod routes;
pub mod videos;
