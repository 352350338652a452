//! Chapter (surah) and verse (ayah) domain model.
//!
//! These types mirror the bundled JSON document one to one. They are loaded
//! once per process and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A single verse of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Verse number within its chapter, sequential from 1.
    pub id: u32,
    /// Verse text in the original script.
    pub text: String,
}

/// A numbered chapter with its ordered verses.
///
/// `total_verses` is the count declared by the data file. It is expected to
/// equal `verses.len()` but the bundled data is trusted, not validated; see
/// [`Chapter::is_consistent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u32,
    pub name: String,
    pub transliteration: String,
    /// Classification tag (e.g. `meccan`, `medinan`).
    #[serde(rename = "type")]
    pub kind: String,
    pub total_verses: u32,
    #[serde(default)]
    pub verses: Vec<Verse>,
}

impl Chapter {
    /// Returns the verse at a zero-based position.
    #[must_use]
    pub fn verse_at(&self, index: usize) -> Option<&Verse> {
        self.verses.get(index)
    }

    /// Number of verses actually present.
    #[must_use]
    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }

    /// Whether the declared verse count matches the verse list.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        usize::try_from(self.total_verses).is_ok_and(|declared| declared == self.verses.len())
    }

    /// Case-insensitive substring match against the display name or the
    /// transliteration. `needle` must already be lowercase.
    #[must_use]
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.transliteration.to_lowercase().contains(needle)
    }
}
