//! Read-only, process-wide chapter store.
//!
//! The store is loaded once at startup and shared by cheap clone (`Arc`).
//! Loading is total: any read or parse failure produces an empty store and a
//! `warn` log line, never an error for the caller.

use crate::domain::Chapter;
use crate::storage::backend::ContentSource;
use std::sync::Arc;

/// Loads every chapter from `source`, or nothing at all.
///
/// # Examples
///
/// ```
/// use ayah::storage::{load, JsonStrSource};
///
/// assert!(load(&JsonStrSource::new("not json")).is_empty());
/// assert!(load(&JsonStrSource::new("[]")).is_empty());
/// ```
pub fn load<S: ContentSource + ?Sized>(source: &S) -> Vec<Chapter> {
    let _span = tracing::debug_span!("content_load", source = %source.describe()).entered();

    match source.read() {
        Ok(chapters) => {
            for chapter in chapters.iter().filter(|c| !c.is_consistent()) {
                tracing::debug!(
                    chapter_id = chapter.id,
                    declared = chapter.total_verses,
                    actual = chapter.verse_count(),
                    "declared verse count differs from verse list"
                );
            }
            tracing::debug!(chapter_count = chapters.len(), "content loaded");
            chapters
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load content, continuing with no chapters");
            Vec::new()
        }
    }
}

/// Immutable chapter collection shared across the application.
#[derive(Debug, Clone)]
pub struct ContentStore {
    chapters: Arc<[Chapter]>,
}

impl ContentStore {
    /// Loads the store from a content source. See [`load`] for failure
    /// behaviour.
    pub fn load<S: ContentSource + ?Sized>(source: &S) -> Self {
        Self::from_chapters(load(source))
    }

    #[must_use]
    pub fn from_chapters(chapters: Vec<Chapter>) -> Self {
        Self {
            chapters: chapters.into(),
        }
    }

    /// All chapters in document order.
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Finds a chapter by id.
    #[must_use]
    pub fn chapter(&self, id: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::from_chapters(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStrSource;

    const DOC: &str = r#"[
        {"id":1,"name":"الفاتحة","transliteration":"Al-Fatihah","type":"meccan","total_verses":3,
         "verses":[{"id":1,"text":"a"},{"id":2,"text":"b"},{"id":3,"text":"c"}]},
        {"id":2,"name":"البقرة","transliteration":"Al-Baqarah","type":"medinan","total_verses":9,
         "verses":[{"id":1,"text":"d"}]}
    ]"#;

    #[test]
    fn loads_and_looks_up_by_id() {
        let store = ContentStore::load(&JsonStrSource::new(DOC));

        assert_eq!(store.len(), 2);
        assert_eq!(store.chapter(2).map(|c| c.transliteration.as_str()), Some("Al-Baqarah"));
        assert!(store.chapter(3).is_none());
    }

    #[test]
    fn inconsistent_counts_are_kept() {
        let store = ContentStore::load(&JsonStrSource::new(DOC));
        let baqarah = store.chapter(2).unwrap();
        assert!(!baqarah.is_consistent());
        assert_eq!(baqarah.verse_count(), 1);
    }

    #[test]
    fn parse_failure_yields_empty_store() {
        let truncated = &DOC[..DOC.len() / 2];
        let store = ContentStore::load(&JsonStrSource::new(truncated));
        assert!(store.is_empty());
    }

    #[test]
    fn clones_share_chapters() {
        let store = ContentStore::load(&JsonStrSource::new(DOC));
        let other = store.clone();
        assert!(std::ptr::eq(store.chapters(), other.chapters()));
    }
}
