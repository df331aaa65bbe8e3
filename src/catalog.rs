//! The chapter catalog — the static table every other module hangs off.
//!
//! The Bhagavad Gita has exactly 18 chapters with fixed verse counts (700
//! verses total). The table is compiled in as a `const` slice: the corpus is
//! closed, so there is nothing to load or configure.
//!
//! Lookups for unknown chapters return `None`, never an error — callers map
//! absence to a not-found page.

/// One chapter of the text: number, Sanskrit title, verse count, and a short
/// English description used in route titles and sitemap entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterRecord {
    pub number: u32,
    pub title: &'static str,
    pub verse_count: u32,
    pub description: &'static str,
}

const CHAPTERS: &[ChapterRecord] = &[
    ChapterRecord {
        number: 1,
        title: "Arjuna Vishada Yoga",
        verse_count: 47,
        description: "The Yoga of Arjuna's Dejection - The crisis of conscience that begins the spiritual dialogue",
    },
    ChapterRecord {
        number: 2,
        title: "Sankhya Yoga",
        verse_count: 72,
        description: "The Yoga of Knowledge - The philosophy of the eternal soul and the path of knowledge",
    },
    ChapterRecord {
        number: 3,
        title: "Karma Yoga",
        verse_count: 43,
        description: "The Yoga of Action - The path of selfless action and duty",
    },
    ChapterRecord {
        number: 4,
        title: "Jnana Karma Sanyasa Yoga",
        verse_count: 42,
        description: "The Yoga of Knowledge and Renunciation of Action",
    },
    ChapterRecord {
        number: 5,
        title: "Karma Sanyasa Yoga",
        verse_count: 29,
        description: "The Yoga of Renunciation of Action",
    },
    ChapterRecord {
        number: 6,
        title: "Atma Samyama Yoga",
        verse_count: 47,
        description: "The Yoga of Self-Control",
    },
    ChapterRecord {
        number: 7,
        title: "Paramahamsa Vijnana Yoga",
        verse_count: 30,
        description: "The Yoga of Knowledge and Realization",
    },
    ChapterRecord {
        number: 8,
        title: "Aksara Brahma Yoga",
        verse_count: 28,
        description: "The Yoga of the Imperishable Brahman",
    },
    ChapterRecord {
        number: 9,
        title: "Raja Vidya Yoga",
        verse_count: 34,
        description: "The Yoga of Royal Knowledge and Royal Mystery",
    },
    ChapterRecord {
        number: 10,
        title: "Vibhuti Vistara Yoga",
        verse_count: 42,
        description: "The Yoga of Divine Glories",
    },
    ChapterRecord {
        number: 11,
        title: "Visvarupa Darshana Yoga",
        verse_count: 55,
        description: "The Yoga of the Vision of the Universal Form",
    },
    ChapterRecord {
        number: 12,
        title: "Bhakti Yoga",
        verse_count: 20,
        description: "The Yoga of Devotion",
    },
    ChapterRecord {
        number: 13,
        title: "Ksetra Ksetrajna Vibhaga Yoga",
        verse_count: 34,
        description: "The Yoga of Distinction between the Field and the Knower of the Field",
    },
    ChapterRecord {
        number: 14,
        title: "Gunatraya Vibhaga Yoga",
        verse_count: 27,
        description: "The Yoga of the Division of the Three Gunas",
    },
    ChapterRecord {
        number: 15,
        title: "Purushottama Prapti Yoga",
        verse_count: 20,
        description: "The Yoga of the Supreme Divine Personality",
    },
    ChapterRecord {
        number: 16,
        title: "Daivasura Sampad Vibhaga Yoga",
        verse_count: 24,
        description: "The Yoga of the Division between the Divine and Demoniac Natures",
    },
    ChapterRecord {
        number: 17,
        title: "Shraddhatraya Vibhaga Yoga",
        verse_count: 28,
        description: "The Yoga of the Division of the Three Kinds of Faith",
    },
    ChapterRecord {
        number: 18,
        title: "Moksha Sanyasa Yoga",
        verse_count: 78,
        description: "The Yoga of Liberation through Renunciation",
    },
];

/// All 18 chapters, ordered by chapter number ascending.
pub fn all_chapters() -> &'static [ChapterRecord] {
    CHAPTERS
}

/// Look up a chapter by number. `None` for anything outside 1..=18.
pub fn chapter_info(number: u32) -> Option<&'static ChapterRecord> {
    // Numbers are contiguous from 1, so this is a direct index.
    number
        .checked_sub(1)
        .and_then(|i| CHAPTERS.get(i as usize))
}

/// Total verse count across the whole corpus (700).
pub fn total_verse_count() -> u32 {
    CHAPTERS.iter().map(|c| c.verse_count).sum()
}

/// Verse numbers of a chapter, `1..=verse_count`. Empty for an unknown chapter.
pub fn chapter_verses(number: u32) -> Vec<u32> {
    match chapter_info(number) {
        Some(c) => (1..=c.verse_count).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_contiguous_from_one() {
        for (i, chapter) in all_chapters().iter().enumerate() {
            assert_eq!(chapter.number, i as u32 + 1);
        }
        assert_eq!(all_chapters().len(), 18);
    }

    #[test]
    fn all_verse_counts_positive() {
        for chapter in all_chapters() {
            assert!(chapter.verse_count > 0, "chapter {}", chapter.number);
        }
    }

    #[test]
    fn total_is_700() {
        assert_eq!(total_verse_count(), 700);
    }

    #[test]
    fn lookup_matches_number() {
        let c2 = chapter_info(2).unwrap();
        assert_eq!(c2.number, 2);
        assert_eq!(c2.title, "Sankhya Yoga");
        assert_eq!(c2.verse_count, 72);
    }

    #[test]
    fn lookup_out_of_range_is_none() {
        assert!(chapter_info(0).is_none());
        assert!(chapter_info(19).is_none());
        assert!(chapter_info(u32::MAX).is_none());
    }

    #[test]
    fn chapter_verses_covers_full_range() {
        let verses = chapter_verses(12);
        assert_eq!(verses.first(), Some(&1));
        assert_eq!(verses.last(), Some(&20));
        assert_eq!(verses.len(), 20);
    }

    #[test]
    fn chapter_verses_empty_for_unknown() {
        assert!(chapter_verses(0).is_empty());
        assert!(chapter_verses(99).is_empty());
    }
}
