//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from
//! [`AppState`](crate::app::AppState). They hold display-ready data only, so
//! any front end (the bundled ANSI renderer, a GUI, a test) can draw them
//! without knowing about the application's rules.
//!
//! Translations are joined to verses here, by position: row `i` carries the
//! translation item at index `i`, or `None` when the translation is shorter
//! than the chapter.

/// Title shown when the requested chapter does not exist.
pub const UNKNOWN_CHAPTER_TITLE: &str = "Unknown Surah";

/// Translator label shown before any translator is selected.
pub const NO_TRANSLATOR_LABEL: &str = "Select translation";

/// Complete UI view model for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIViewModel {
    ChapterList(ChapterListView),
    VerseList(VerseListView),
}

/// Chapter list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterListView {
    /// Header title, including the visible count.
    pub title: String,

    /// Current search text.
    pub query: String,

    /// Human-readable sort direction.
    pub sort_label: String,

    /// Visible chapters, already filtered and ordered.
    pub items: Vec<ChapterItem>,

    /// Whether the dark theme is active.
    pub dark: bool,
}

/// One entry of the chapter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterItem {
    pub id: u32,
    pub name: String,
    pub transliteration: String,
    pub verse_count: u32,
}

/// Verse list screen of one chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseListView {
    /// Chapter display name, or [`UNKNOWN_CHAPTER_TITLE`].
    pub title: String,

    /// Verses with their positional translations.
    pub rows: Vec<VerseRow>,

    /// Selected translator name, or [`NO_TRANSLATOR_LABEL`].
    pub translator_label: String,

    /// Selected reciter name.
    pub reciter_label: String,

    /// Whether recitation is running.
    pub is_playing: bool,

    /// Verse text size. Terminal output only reports it; graphical front
    /// ends scale verse text by it.
    pub font_size: u16,

    /// Whether the dark theme is active.
    pub dark: bool,
}

/// One verse with its aligned translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRow {
    /// Verse number within the chapter.
    pub number: u32,

    pub text: String,

    /// Translation at the same position, if the translation is long enough.
    pub translation: Option<String>,

    /// Whether this verse is the sequencer's current verse.
    pub is_current: bool,
}

impl VerseRow {
    /// Text for the platform share sheet: the verse, then a blank line and the
    /// translation when there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ayah::ui::VerseRow;
    ///
    /// let row = VerseRow {
    ///     number: 1,
    ///     text: "verse".to_string(),
    ///     translation: Some("translation".to_string()),
    ///     is_current: false,
    /// };
    /// assert_eq!(row.share_text(), "verse\n\ntranslation");
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        match &self.translation {
            Some(translation) => format!("{}\n\n{translation}", self.text),
            None => self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_text_without_translation_is_just_the_verse() {
        let row = VerseRow {
            number: 3,
            text: "verse".to_string(),
            translation: None,
            is_current: true,
        };
        assert_eq!(row.share_text(), "verse");
    }
}
