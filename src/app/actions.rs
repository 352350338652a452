//! Actions representing side effects to be executed by the front end.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler. Actions bridge pure state transitions and effectful
//! operations such as playing audio or talking to the background worker.
//!
//! # Example
//!
//! ```rust
//! use ayah::app::Action;
//! use ayah::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::list_translators()),
//!     Action::StopAudio,
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a request to the background worker.
    PostToWorker(WorkerMessage),

    /// Starts streaming audio for one verse, replacing anything playing.
    ///
    /// When the audio ends the front end must send
    /// [`Event::AudioFinished`](crate::app::Event::AudioFinished).
    PlayAudio {
        /// Fully resolved audio URL.
        url: String,
        /// Zero-based verse position within the open chapter.
        verse_index: usize,
    },

    /// Stops or pauses the current audio and releases it.
    StopAudio,
}
