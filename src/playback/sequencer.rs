//! Verse-by-verse recitation sequencer.
//!
//! The sequencer walks a chapter's verse list one step at a time. It does not
//! touch audio: each transition returns a [`PlaybackCommand`] that the caller
//! hands to whatever plays sound, and the caller reports back with
//! [`Sequencer::on_item_finished`] when a verse has been fully played.
//!
//! # State Machine
//!
//! ```text
//!            start (non-empty)             on_item_finished (more verses)
//!  Stopped ───────────────────▶ Playing ◀──────────────────────────────┐
//!     ▲                          │  │                                   │
//!     │   stop / last verse done │  └───────────────────────────────────┘
//!     └──────────────────────────┘
//! ```
//!
//! `stop` keeps the index (pause semantics); `reset` also rewinds it to 0.

use crate::domain::Chapter;

/// Whether audio is currently being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// Signal for the external audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Begin audio for the verse at this zero-based index.
    Play { index: usize },
    /// Stop or pause whatever is playing.
    Stop,
}

/// Index-advancing playback state machine for one chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequencer {
    state: PlaybackState,
    index: usize,
    verse_count: usize,
}

impl Sequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing)
    }

    /// Starts from the first verse of `chapter`.
    ///
    /// A chapter without verses leaves the sequencer stopped and emits nothing.
    pub fn start(&mut self, chapter: &Chapter) -> Option<PlaybackCommand> {
        self.verse_count = chapter.verse_count();
        self.index = 0;

        if self.verse_count == 0 {
            tracing::debug!(chapter_id = chapter.id, "chapter has no verses, not starting");
            self.state = PlaybackState::Stopped;
            return None;
        }

        self.state = PlaybackState::Playing;
        tracing::debug!(chapter_id = chapter.id, verse_count = self.verse_count, "playback started");
        Some(PlaybackCommand::Play { index: 0 })
    }

    /// Advances after the current verse finished playing.
    ///
    /// Ignored while stopped. On the last verse the sequencer stops and keeps
    /// its index.
    pub fn on_item_finished(&mut self) -> Option<PlaybackCommand> {
        if !self.is_playing() {
            return None;
        }

        if self.index + 1 < self.verse_count {
            self.index += 1;
            tracing::trace!(index = self.index, "advancing to next verse");
            Some(PlaybackCommand::Play { index: self.index })
        } else {
            tracing::debug!(index = self.index, "reached last verse, stopping");
            self.state = PlaybackState::Stopped;
            Some(PlaybackCommand::Stop)
        }
    }

    /// Pauses without moving the index.
    pub fn stop(&mut self) -> Option<PlaybackCommand> {
        if !self.is_playing() {
            return None;
        }
        self.state = PlaybackState::Stopped;
        Some(PlaybackCommand::Stop)
    }

    /// Re-requests the current verse, e.g. after the audio source changed.
    #[must_use]
    pub fn reissue(&self) -> Option<PlaybackCommand> {
        self.is_playing().then_some(PlaybackCommand::Play { index: self.index })
    }

    /// Rewinds to the first verse and stops; used when leaving a chapter.
    pub fn reset(&mut self) -> Option<PlaybackCommand> {
        let command = self.stop();
        self.index = 0;
        self.verse_count = 0;
        command
    }
}
