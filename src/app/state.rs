//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of every piece of reader
//! state: the shared chapter store, the chapter-list query, display settings,
//! translation selection, reciter choice and the playback sequencer. Nothing
//! here is global; the front end owns one `AppState` and changes it only by
//! sending events through [`handle_event`](crate::app::handle_event).
//!
//! # State Components
//!
//! - **Content**: Immutable chapter store shared by `Arc`
//! - **Chapter list**: Query text, sort order and the derived filtered list
//! - **Display**: Theme and font size
//! - **Translation**: Translator list, selection, current translation and the
//!   in-flight fetch ticket
//! - **Recitation**: Selected reciter and the sequencer

use super::actions::Action;
use super::modes::Screen;
use crate::domain::{translation_for, Chapter, Reciter, TranslatedVerse, Translator, DEFAULT_AUDIO_BASE_URL};
use crate::playback::{PlaybackCommand, Sequencer};
use crate::storage::{filter, ContentStore, SortOrder};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ChapterItem, ChapterListView, UIViewModel, VerseListView, VerseRow, NO_TRANSLATOR_LABEL,
    UNKNOWN_CHAPTER_TITLE,
};
use crate::worker::{FetchTicket, WorkerMessage};

/// Verse text size used when nothing else is configured.
pub const DEFAULT_FONT_SIZE: u16 = 18;

/// Font size change per increase/decrease step.
pub const FONT_SIZE_STEP: u16 = 2;

/// Smallest selectable font size.
pub const MIN_FONT_SIZE: u16 = 8;

/// Largest selectable font size.
pub const MAX_FONT_SIZE: u16 = 64;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Chapters loaded once at startup.
    pub content: ContentStore,

    /// Currently shown screen.
    pub screen: Screen,

    /// Chapter list search text.
    pub query: String,

    /// Chapter list ordering.
    pub sort: SortOrder,

    /// Chapters matching `query`, ordered by `sort`.
    ///
    /// Recomputed by `apply_filter()` after every query or sort change.
    pub filtered_chapters: Vec<Chapter>,

    /// Active color scheme.
    pub theme: Theme,

    /// Verse text size.
    pub font_size: u16,

    /// Translator editions offered by the API; empty until fetched.
    pub translators: Vec<Translator>,

    /// Selected translator, if any.
    pub selected_translator: Option<Translator>,

    /// Translation of the open chapter, aligned by position with its verses.
    pub translations: Vec<TranslatedVerse>,

    /// Selected reciter.
    pub reciter: Reciter,

    /// Recitation state for the open chapter.
    pub sequencer: Sequencer,

    /// Root of the per-verse audio files.
    pub audio_base_url: String,

    /// Ticket of the translation fetch whose result is still wanted.
    pub(crate) in_flight: Option<FetchTicket>,

    /// Whether a translator list request is outstanding.
    pub(crate) translators_requested: bool,

    /// Monotonic counter stamped on each fetch ticket.
    generation: u64,
}

impl AppState {
    /// Creates a new application state over loaded content.
    ///
    /// Starts on the chapter list with an empty query, ascending order, the
    /// default reciter and no translator.
    #[must_use]
    pub fn new(content: ContentStore, theme: Theme) -> Self {
        let mut state = Self {
            content,
            screen: Screen::ChapterList,
            query: String::new(),
            sort: SortOrder::Ascending,
            filtered_chapters: vec![],
            theme,
            font_size: DEFAULT_FONT_SIZE,
            translators: vec![],
            selected_translator: None,
            translations: vec![],
            reciter: Reciter::default(),
            sequencer: Sequencer::new(),
            audio_base_url: DEFAULT_AUDIO_BASE_URL.to_string(),
            in_flight: None,
            translators_requested: false,
            generation: 0,
        };
        state.apply_filter();
        state
    }

    /// Recomputes `filtered_chapters` from the store, query and sort order.
    pub fn apply_filter(&mut self) {
        self.filtered_chapters = filter(self.content.chapters(), &self.query, self.sort.is_ascending());
    }

    /// Chapter of the verse screen, when shown and present in the store.
    #[must_use]
    pub fn open_chapter(&self) -> Option<&Chapter> {
        self.screen.chapter_id().and_then(|id| self.content.chapter(id))
    }

    /// Sets the font size, clamped to the selectable range.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Issues a translation fetch for the open chapter and selected
    /// translator, superseding any fetch still in flight.
    ///
    /// Returns `None` when there is no chapter or no translator to fetch for.
    pub(crate) fn request_translation(&mut self) -> Option<Action> {
        let chapter_id = self.open_chapter()?.id;
        let translator_id = self.selected_translator.as_ref()?.identifier.clone();

        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            chapter_id,
            translator_id,
        };

        tracing::debug!(
            generation = ticket.generation,
            chapter_id = ticket.chapter_id,
            translator_id = %ticket.translator_id,
            "requesting translation"
        );

        self.in_flight = Some(ticket.clone());
        Some(Action::PostToWorker(WorkerMessage::fetch_translation(ticket)))
    }

    /// Issues a translator list request unless one is outstanding.
    ///
    /// The list is never cached across requests; each response replaces it.
    pub(crate) fn request_translators(&mut self) -> Option<Action> {
        if self.translators_requested {
            return None;
        }
        self.translators_requested = true;
        Some(Action::PostToWorker(WorkerMessage::list_translators()))
    }

    /// Whether a fetch result carrying `ticket` should still be applied.
    #[must_use]
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.in_flight.as_ref() == Some(ticket)
    }

    /// Translates a sequencer command into an audio action for the open
    /// chapter.
    pub(crate) fn playback_action(&self, command: PlaybackCommand) -> Option<Action> {
        match command {
            PlaybackCommand::Stop => Some(Action::StopAudio),
            PlaybackCommand::Play { index } => {
                let chapter = self.open_chapter()?;
                let verse = chapter.verse_at(index)?;
                Some(Action::PlayAudio {
                    url: self.reciter.audio_url(&self.audio_base_url, chapter.id, verse.id),
                    verse_index: index,
                })
            }
        }
    }

    /// Computes the view model of the current screen.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        match self.screen {
            Screen::ChapterList => UIViewModel::ChapterList(self.compute_chapter_list()),
            Screen::VerseList { .. } => UIViewModel::VerseList(self.compute_verse_list()),
        }
    }

    fn compute_chapter_list(&self) -> ChapterListView {
        let items = self
            .filtered_chapters
            .iter()
            .map(|c| ChapterItem {
                id: c.id,
                name: c.name.clone(),
                transliteration: c.transliteration.clone(),
                verse_count: c.total_verses,
            })
            .collect::<Vec<_>>();

        ChapterListView {
            title: format!(" Surahs ({}) ", items.len()),
            query: self.query.clone(),
            sort_label: self.sort.label().to_string(),
            items,
            dark: self.theme.dark,
        }
    }

    fn compute_verse_list(&self) -> VerseListView {
        let chapter = self.open_chapter();

        let rows = chapter.map_or_else(Vec::new, |chapter| {
            chapter
                .verses
                .iter()
                .enumerate()
                .map(|(index, verse)| VerseRow {
                    number: verse.id,
                    text: verse.text.clone(),
                    translation: translation_for(&self.translations, index).map(str::to_string),
                    is_current: index == self.sequencer.index(),
                })
                .collect()
        });

        VerseListView {
            title: chapter.map_or_else(|| UNKNOWN_CHAPTER_TITLE.to_string(), |c| c.name.clone()),
            rows,
            translator_label: self
                .selected_translator
                .as_ref()
                .map_or_else(|| NO_TRANSLATOR_LABEL.to_string(), |t| t.name.clone()),
            reciter_label: self.reciter.name.to_string(),
            is_playing: self.sequencer.is_playing(),
            font_size: self.font_size,
            dark: self.theme.dark,
        }
    }
}
