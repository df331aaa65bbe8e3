//! Verse addressing and adjacency.
//!
//! A verse is addressed by its `(chapter, verse)` pair. The whole corpus reads
//! as one linear sequence, so previous/next navigation crosses chapter
//! boundaries: the verse after 1.47 is 2.1, the verse before 3.1 is 2.72.
//! Chapter 1 verse 1 has no previous; chapter 18 verse 78 has no next.
//!
//! Everything here is a pure function over the static [`catalog`](crate::catalog).
//! Invalid addresses are never an error: [`verse_exists`] answers `false`,
//! lookups answer `None`.

use crate::catalog;
use std::fmt;

/// The `(chapter, verse)` pair identifying one verse. A plain value type —
/// constructing one does not imply the address is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseAddress {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseAddress {
    pub fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }

    /// Composite key used by the video index and coverage maps: `"c-v"`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.chapter, self.verse)
    }
}

impl fmt::Display for VerseAddress {
    /// Traditional citation form: `2.47`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chapter, self.verse)
    }
}

/// Previous/next neighbors of an address in the linear corpus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub previous: Option<VerseAddress>,
    pub next: Option<VerseAddress>,
}

/// True iff the chapter exists and `1 <= verse <= verse_count`.
pub fn verse_exists(chapter: u32, verse: u32) -> bool {
    match catalog::chapter_info(chapter) {
        Some(c) => verse >= 1 && verse <= c.verse_count,
        None => false,
    }
}

/// The verse after `(chapter, verse)`, crossing into the next chapter at a
/// chapter's last verse. `None` past the end of chapter 18, or if the chapter
/// is unknown.
///
/// The input address itself is not validated — an out-of-range verse number
/// still gets the arithmetic answer. Callers that need a validity guarantee
/// check [`verse_exists`] first.
pub fn next_verse(chapter: u32, verse: u32) -> Option<VerseAddress> {
    let info = catalog::chapter_info(chapter)?;

    if verse < info.verse_count {
        return Some(VerseAddress::new(chapter, verse + 1));
    }
    if chapter < catalog::all_chapters().len() as u32 {
        return Some(VerseAddress::new(chapter + 1, 1));
    }
    None
}

/// The verse before `(chapter, verse)`, crossing into the previous chapter's
/// last verse at verse 1. `None` before 1.1. Input is not validated, same as
/// [`next_verse`].
pub fn previous_verse(chapter: u32, verse: u32) -> Option<VerseAddress> {
    if verse > 1 {
        return Some(VerseAddress::new(chapter, verse - 1));
    }
    if chapter > 1 {
        if let Some(prev) = catalog::chapter_info(chapter - 1) {
            return Some(VerseAddress::new(chapter - 1, prev.verse_count));
        }
    }
    None
}

/// Both neighbors at once, for building per-verse navigation links.
pub fn adjacent_verses(chapter: u32, verse: u32) -> Adjacent {
    Adjacent {
        previous: previous_verse(chapter, verse),
        next: next_verse(chapter, verse),
    }
}

/// Every valid address, chapter ascending and verse ascending within each
/// chapter. Length equals [`catalog::total_verse_count`].
pub fn all_verse_keys() -> Vec<VerseAddress> {
    let mut keys = Vec::with_capacity(catalog::total_verse_count() as usize);
    for chapter in catalog::all_chapters() {
        for verse in 1..=chapter.verse_count {
            keys.push(VerseAddress::new(chapter.number, verse));
        }
    }
    keys
}
