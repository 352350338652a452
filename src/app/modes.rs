//! Screen state for the application.
//!
//! The reader has two screens: the chapter list with its search field and sort
//! toggle, and the verse list of one chapter with translation and recitation
//! controls.

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Searchable, sortable list of all chapters.
    #[default]
    ChapterList,

    /// Verses of one chapter.
    ///
    /// The id is kept even when no such chapter exists so the screen can show
    /// a placeholder title instead of failing.
    VerseList {
        /// Id of the chapter being read.
        chapter_id: u32,
    },
}

impl Screen {
    /// Chapter id of the verse screen, if shown.
    #[must_use]
    pub const fn chapter_id(self) -> Option<u32> {
        match self {
            Self::ChapterList => None,
            Self::VerseList { chapter_id } => Some(chapter_id),
        }
    }
}
