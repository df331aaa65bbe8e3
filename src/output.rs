//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every entity
//! (chapter, language catalog, route group) is its semantic identity, with
//! file/URL details as indented context lines.
//!
//! ```text
//! Chapters
//! 001 Arjuna Vishada Yoga (47 verses)
//! 002 Sankhya Yoga (72 verses)
//! ...
//!
//! Content
//!     698 of 700 verses have content
//!     Missing: 1.3, 1.4 (+ 0 more)
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::catalog;
use crate::content::Coverage;
use crate::routes::SiteRoute;
use crate::videos::{self, LanguageReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// How many missing addresses to list before collapsing into a count.
const MISSING_PREVIEW: usize = 10;

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(coverage: &Coverage) -> Vec<String> {
    let mut lines = vec!["Chapters".to_string()];
    for chapter in catalog::all_chapters() {
        lines.push(format!(
            "{} {} ({} verses)",
            format_index(chapter.number as usize),
            chapter.title,
            chapter.verse_count
        ));
    }

    lines.push(String::new());
    lines.push("Content".to_string());
    lines.push(format!(
        "{}{} of {} verses have content",
        indent(1),
        coverage.present,
        coverage.total()
    ));

    if !coverage.is_complete() {
        let preview: Vec<String> = coverage
            .missing
            .iter()
            .take(MISSING_PREVIEW)
            .map(|a| a.to_string())
            .collect();
        let rest = coverage.missing.len().saturating_sub(MISSING_PREVIEW);
        let suffix = if rest > 0 {
            format!(" (+ {rest} more)")
        } else {
            String::new()
        };
        lines.push(format!(
            "{}Missing: {}{}",
            indent(1),
            preview.join(", "),
            suffix
        ));
    }

    lines
}

pub fn print_check_output(coverage: &Coverage) {
    for line in format_check_output(coverage) {
        println!("{line}");
    }
}

// ============================================================================
// routes
// ============================================================================

pub fn format_routes_output(routes: &[SiteRoute]) -> Vec<String> {
    let verses = routes.iter().filter(|r| r.url.contains("/verse/")).count();
    let chapters = routes
        .iter()
        .filter(|r| r.url.contains("/chapters/") && !r.url.contains("/verse/"))
        .count();
    let fixed = routes.len() - verses - chapters;

    vec![
        "Routes".to_string(),
        format!(
            "{}{} total: {} chapter pages, {} verse pages, {} fixed pages",
            indent(1),
            routes.len(),
            chapters,
            verses,
            fixed
        ),
    ]
}

pub fn print_routes_output(routes: &[SiteRoute]) {
    for line in format_routes_output(routes) {
        println!("{line}");
    }
}

// ============================================================================
// videos
// ============================================================================

pub fn format_videos_output(reports: &[LanguageReport]) -> Vec<String> {
    if reports.is_empty() {
        return vec!["Videos".to_string(), format!("{}No catalogs found", indent(1))];
    }

    let mut lines = vec!["Videos".to_string()];
    for (pos, report) in reports.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} verses covered)",
            format_index(pos + 1),
            videos::language_label(&report.language),
            report.indexed
        ));
        lines.push(format!(
            "{}Source: {}_videos.json ({} records)",
            indent(1),
            report.language,
            report.total
        ));
        if report.skipped > 0 {
            lines.push(format!(
                "{}Skipped: {} records without a verse reference",
                indent(1),
                report.skipped
            ));
        }
        if !report.out_of_range.is_empty() {
            lines.push(format!(
                "{}Out of range: {}",
                indent(1),
                report.out_of_range.join(", ")
            ));
        }
    }
    lines
}

pub fn print_videos_output(reports: &[LanguageReport]) {
    for line in format_videos_output(reports) {
        println!("{line}");
    }
}
