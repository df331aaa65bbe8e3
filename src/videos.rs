//! Per-language verse video index.
//!
//! Each supported language may ship a JSON catalog of commentary videos
//! (`<code>_videos.json`, one array of records). A record's only tie to the
//! text is a `"chapter.verse"` reference embedded somewhere in its free-text
//! title, so indexing is best-effort by design:
//!
//! - no parseable `<int>.<int>` in the title → the record is skipped silently
//! - several records resolving to the same verse → last write wins
//! - the extracted pair is **not** checked against the catalog; lookups for
//!   valid addresses simply never reach an out-of-range key. The build report
//!   surfaces such keys so bad catalog data is visible.
//!
//! Indexes are built once at load time and read-only afterwards. Merged
//! per-verse lookups use a `BTreeMap` keyed by language code, so iteration
//! order is deterministic (lexicographic by code).

use crate::address::{self, VerseAddress};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VideoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// A language offered for verse videos. `flag` is the emoji shown in the
/// language switcher.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoLanguage {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// Languages the site can offer videos in. Having an entry here does not mean
/// a catalog file exists — coverage is whatever [`VideoLibrary::load`] finds.
pub const SUPPORTED_LANGUAGES: &[VideoLanguage] = &[
    VideoLanguage { code: "en", name: "English", flag: "🇺🇸" },
    VideoLanguage { code: "hi", name: "Hindi", flag: "🇮🇳" },
    VideoLanguage { code: "bn", name: "Bengali", flag: "🇧🇩" },
    VideoLanguage { code: "te", name: "Telugu", flag: "🇮🇳" },
    VideoLanguage { code: "ta", name: "Tamil", flag: "🇮🇳" },
    VideoLanguage { code: "kn", name: "Kannada", flag: "🇮🇳" },
    VideoLanguage { code: "ml", name: "Malayalam", flag: "🇮🇳" },
    VideoLanguage { code: "gu", name: "Gujarati", flag: "🇮🇳" },
    VideoLanguage { code: "pa", name: "Punjabi", flag: "🇮🇳" },
    VideoLanguage { code: "or", name: "Odia", flag: "🇮🇳" },
];

pub const DEFAULT_VIDEO_LANGUAGE: &str = "te";

/// Registry entry for a code, if it is a supported language.
pub fn language_meta(code: &str) -> Option<&'static VideoLanguage> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
}

/// Human label for a language code; unknown codes fall back to the uppercased
/// code itself.
pub fn language_label(code: &str) -> String {
    match language_meta(code) {
        Some(meta) => meta.name.to_string(),
        None => code.to_uppercase(),
    }
}

/// One record as it appears in a raw catalog file. Untrusted input: the
/// chapter/verse reference lives only in the title text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideoEntry {
    pub title: String,
    pub video_id: String,
    pub embed_link: String,
    #[serde(default)]
    pub playlist_id: Option<String>,
}

/// An indexed video, ready for the player: which language it is in and where
/// to embed it from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseVideoSource {
    pub language: String,
    pub embed_url: String,
    pub video_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
}

/// One language's index: composite `"c-v"` key → video source.
pub type VideoIndex = BTreeMap<String, VerseVideoSource>;

/// Merged lookup result for one verse: language code → source.
pub type VerseSources<'a> = BTreeMap<&'a str, &'a VerseVideoSource>;

static VERSE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)").expect("verse ref pattern is valid"));

/// Extract the first `"<chapter>.<verse>"` reference from free text, e.g.
/// `"భగవద్గీత 1.2: ..."` → `(1, 2)`. `None` if there is no such pattern or a
/// captured number overflows — the single place the silent-skip policy lives.
pub fn parse_verse_ref(title: &str) -> Option<(u32, u32)> {
    let caps = VERSE_REF.captures(title)?;
    let chapter = caps[1].parse::<u32>().ok()?;
    let verse = caps[2].parse::<u32>().ok()?;
    Some((chapter, verse))
}

/// Build one language's index from its raw catalog. Records without a
/// parseable verse reference contribute nothing; duplicate references keep
/// the last record. Deterministic: same input, same index.
pub fn build_video_index(language_code: &str, entries: &[RawVideoEntry]) -> VideoIndex {
    let mut index = VideoIndex::new();

    for entry in entries {
        let Some((chapter, verse)) = parse_verse_ref(&entry.title) else {
            continue;
        };

        let key = VerseAddress::new(chapter, verse).key();
        index.insert(
            key,
            VerseVideoSource {
                language: language_code.to_string(),
                embed_url: entry.embed_link.clone(),
                video_id: entry.video_id.clone(),
                title: entry.title.clone(),
                playlist_id: entry.playlist_id.clone(),
            },
        );
    }

    index
}

/// Per-language outcome of an index build, for CLI reporting.
#[derive(Debug, Clone)]
pub struct LanguageReport {
    pub language: String,
    /// Records in the raw catalog file.
    pub total: usize,
    /// Records with no parseable verse reference in the title.
    pub skipped: usize,
    /// Distinct verses indexed (duplicates collapse, last write wins).
    pub indexed: usize,
    /// Indexed keys that name a verse the catalog does not have.
    pub out_of_range: Vec<String>,
}

/// Result of loading all available catalogs from a videos directory.
pub struct LoadResult {
    pub library: VideoLibrary,
    pub reports: Vec<LanguageReport>,
}

/// All loaded per-language indexes. Built once, then only read.
#[derive(Debug, Default)]
pub struct VideoLibrary {
    indexes: BTreeMap<String, VideoIndex>,
}

impl VideoLibrary {
    /// Load every supported language's catalog from `dir`. A language with no
    /// `<code>_videos.json` file simply has no coverage; a present file that
    /// fails to read or parse is an error.
    pub fn load(dir: &Path) -> Result<LoadResult, VideoError> {
        let mut library = VideoLibrary::default();
        let mut reports = Vec::new();

        for language in SUPPORTED_LANGUAGES {
            let path = dir.join(format!("{}_videos.json", language.code));
            if !path.exists() {
                continue;
            }

            let content = fs::read_to_string(&path)?;
            let entries: Vec<RawVideoEntry> =
                serde_json::from_str(&content).map_err(|source| VideoError::Json {
                    path: path.display().to_string(),
                    source,
                })?;

            reports.push(library.insert_language(language.code, &entries));
        }

        Ok(LoadResult { library, reports })
    }

    /// Index one language's entries and add them to the library, replacing
    /// any previous index for that code.
    pub fn insert_language(&mut self, code: &str, entries: &[RawVideoEntry]) -> LanguageReport {
        let index = build_video_index(code, entries);

        let skipped = entries
            .iter()
            .filter(|e| parse_verse_ref(&e.title).is_none())
            .count();
        let out_of_range = index
            .values()
            .filter_map(|source| {
                let (chapter, verse) = parse_verse_ref(&source.title)?;
                if address::verse_exists(chapter, verse) {
                    None
                } else {
                    Some(VerseAddress::new(chapter, verse).key())
                }
            })
            .collect();

        let report = LanguageReport {
            language: code.to_string(),
            total: entries.len(),
            skipped,
            indexed: index.len(),
            out_of_range,
        };
        self.indexes.insert(code.to_string(), index);
        report
    }

    /// Registry entries for languages that actually have a loaded index,
    /// lexicographic by code. Drives the site's language switcher.
    pub fn video_languages(&self) -> Vec<&'static VideoLanguage> {
        self.indexes
            .keys()
            .filter_map(|code| language_meta(code))
            .collect()
    }

    /// Every language's video for one verse, keyed by language code. Empty
    /// map when no language covers the address.
    pub fn verse_video_sources(&self, chapter: u32, verse: u32) -> VerseSources<'_> {
        let key = VerseAddress::new(chapter, verse).key();
        self.indexes
            .iter()
            .filter_map(|(code, index)| index.get(&key).map(|s| (code.as_str(), s)))
            .collect()
    }

    /// Number of verses a language has coverage for; 0 if not loaded.
    pub fn coverage(&self, code: &str) -> usize {
        self.indexes.get(code).map_or(0, BTreeMap::len)
    }
}

/// Pick the language to show first: `fallback` if it has a video for this
/// verse, else the first covering language in key order, else `None`.
pub fn resolve_default_video_language<'a>(
    sources: &VerseSources<'a>,
    fallback: &str,
) -> Option<&'a str> {
    if let Some((&code, _)) = sources.get_key_value(fallback) {
        return Some(code);
    }
    sources.keys().next().copied()
}

// ---------------------------------------------------------------------------
// YouTube URL helpers
// ---------------------------------------------------------------------------

static YOUTUBE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)",
        r"youtube\.com/shorts/([^&\n?#]+)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("youtube pattern is valid"))
    .collect()
});

/// Pull the video id out of a watch/short/embed URL, if it is one.
pub fn extract_video_id(url: &str) -> Option<&str> {
    YOUTUBE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Privacy-lean embed URL for a video id.
pub fn embed_url(video_id: &str, autoplay: bool) -> String {
    let mut url = format!("https://www.youtube.com/embed/{video_id}?rel=0&modestbranding=1&showinfo=0");
    if autoplay {
        url.push_str("&autoplay=1");
    }
    url
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    Default,
    Medium,
    High,
    MaxRes,
}

/// Thumbnail image URL for a video id.
pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    let name = match quality {
        ThumbnailQuality::Default => "default",
        ThumbnailQuality::Medium => "mqdefault",
        ThumbnailQuality::High => "hqdefault",
        ThumbnailQuality::MaxRes => "maxresdefault",
    };
    format!("https://img.youtube.com/vi/{video_id}/{name}.jpg")
}
