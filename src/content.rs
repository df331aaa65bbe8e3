//! The file-backed verse content store.
//!
//! Each verse lives in its own directory with four plain-text files:
//!
//! ```text
//! content/
//! ├── chapter-1/
//! │   ├── verse-1/
//! │   │   ├── sanskrit-shloka.txt
//! │   │   ├── romanized-transliteration.txt
//! │   │   ├── english-translation.txt
//! │   │   └── word-by-word-translation.txt
//! │   └── verse-2/
//! │       └── ...
//! └── chapter-2/
//!     └── ...
//! ```
//!
//! Missing content is not an error: [`load_verse`] answers `None` for an
//! invalid address or an incomplete directory, and the `check` command's
//! [`coverage`] report lists what is missing. The store is read-only input.

use crate::address::{self, VerseAddress};
use crate::catalog;
use std::fs;
use std::path::{Path, PathBuf};

const SANSKRIT_FILE: &str = "sanskrit-shloka.txt";
const ROMANIZED_FILE: &str = "romanized-transliteration.txt";
const ENGLISH_FILE: &str = "english-translation.txt";
const WORD_BY_WORD_FILE: &str = "word-by-word-translation.txt";

/// One verse's text in all four renderings.
#[derive(Debug, Clone, PartialEq)]
pub struct VerseContent {
    pub sanskrit: String,
    pub romanized: String,
    pub english: String,
    pub word_by_word: String,
}

/// Directory holding one verse's files.
pub fn verse_dir(root: &Path, chapter: u32, verse: u32) -> PathBuf {
    root.join(format!("chapter-{chapter}"))
        .join(format!("verse-{verse}"))
}

fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}

/// Load one verse's content. `None` if the address is invalid or any of the
/// four files is missing or unreadable — an incomplete verse is treated as
/// absent rather than partially rendered.
pub fn load_verse(root: &Path, chapter: u32, verse: u32) -> Option<VerseContent> {
    if !address::verse_exists(chapter, verse) {
        return None;
    }

    let dir = verse_dir(root, chapter, verse);
    Some(VerseContent {
        sanskrit: read_trimmed(&dir.join(SANSKRIT_FILE))?,
        romanized: read_trimmed(&dir.join(ROMANIZED_FILE))?,
        english: read_trimmed(&dir.join(ENGLISH_FILE))?,
        word_by_word: read_trimmed(&dir.join(WORD_BY_WORD_FILE))?,
    })
}

/// True iff all four content files exist for the address.
pub fn verse_content_exists(root: &Path, chapter: u32, verse: u32) -> bool {
    let dir = verse_dir(root, chapter, verse);
    [SANSKRIT_FILE, ROMANIZED_FILE, ENGLISH_FILE, WORD_BY_WORD_FILE]
        .iter()
        .all(|f| dir.join(f).is_file())
}

/// Content coverage across the whole corpus, for the `check` command.
#[derive(Debug)]
pub struct Coverage {
    /// Valid addresses with complete content.
    pub present: usize,
    /// Valid addresses with missing or incomplete content, corpus order.
    pub missing: Vec<VerseAddress>,
}

impl Coverage {
    pub fn total(&self) -> usize {
        self.present + self.missing.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Walk every valid address and report which have content on disk.
pub fn coverage(root: &Path) -> Coverage {
    let mut present = 0;
    let mut missing = Vec::new();

    for key in address::all_verse_keys() {
        if verse_content_exists(root, key.chapter, key.verse) {
            present += 1;
        } else {
            missing.push(key);
        }
    }

    debug_assert_eq!(
        present + missing.len(),
        catalog::total_verse_count() as usize
    );
    Coverage { present, missing }
}
