//! Chapter list query: substring filter plus id ordering.
//!
//! The query is a pure function of its inputs. It never mutates the store and
//! recomputes the whole result on every call.

use crate::domain::Chapter;

/// Ordering of the chapter list by chapter id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "1 → 114",
            Self::Descending => "114 → 1",
        }
    }
}

/// Filters chapters by `query` and orders them by id.
///
/// A chapter matches when its display name or transliteration contains
/// `query`, compared case-insensitively. The empty query matches every
/// chapter. Ids are unique, so the ordering has no ties.
///
/// # Examples
///
/// ```
/// use ayah::domain::Chapter;
/// use ayah::storage::filter;
///
/// let chapter = |id: u32, name: &str| Chapter {
///     id,
///     name: name.to_string(),
///     transliteration: name.to_string(),
///     kind: "meccan".to_string(),
///     total_verses: 0,
///     verses: vec![],
/// };
/// let chapters = vec![chapter(1, "Al-Fatihah"), chapter(112, "Al-Ikhlas")];
///
/// let ids: Vec<u32> = filter(&chapters, "AL-", false).iter().map(|c| c.id).collect();
/// assert_eq!(ids, vec![112, 1]);
/// assert!(filter(&chapters, "yasin", true).is_empty());
/// ```
#[must_use]
pub fn filter(chapters: &[Chapter], query: &str, ascending: bool) -> Vec<Chapter> {
    let _span = tracing::debug_span!(
        "chapter_filter",
        total_chapters = chapters.len(),
        query_len = query.len(),
        ascending = ascending
    )
    .entered();

    let needle = query.to_lowercase();

    let mut matched: Vec<Chapter> = chapters
        .iter()
        .filter(|chapter| chapter.matches_lowercase(&needle))
        .cloned()
        .collect();

    if ascending {
        matched.sort_by_key(|c| c.id);
    } else {
        matched.sort_by_key(|c| std::cmp::Reverse(c.id));
    }

    tracing::debug!(filtered_count = matched.len(), "chapter filter applied");
    matched
}
