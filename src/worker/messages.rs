//! Worker thread message types.
//!
//! This module defines the request and response protocol between the event
//! thread and the background worker that performs translation fetches.

use crate::domain::{TranslatedVerse, Translator};

/// Selection snapshot attached to a translation fetch.
///
/// The event thread bumps `generation` on every fetch it issues. When the
/// response comes back, the result is applied only if the ticket still equals
/// the current selection; anything else is a superseded request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub generation: u64,
    pub chapter_id: u32,
    pub translator_id: String,
}

/// Messages sent from the event thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// List translator editions.
    ListTranslators,

    /// Fetch the translation described by the ticket.
    FetchTranslation {
        /// Selection the request was issued for.
        ticket: FetchTicket,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn list_translators() -> Self {
        Self::ListTranslators
    }

    #[must_use]
    pub const fn fetch_translation(ticket: FetchTicket) -> Self {
        Self::FetchTranslation { ticket }
    }

    /// Operation name used in logs and error responses.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::ListTranslators => "list translators",
            Self::FetchTranslation { .. } => "fetch translation",
        }
    }
}

/// Responses sent from the worker back to the event thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// Translator editions were fetched.
    TranslatorsLoaded {
        translators: Vec<Translator>,
    },

    /// A chapter translation was fetched.
    TranslationLoaded {
        /// Ticket of the originating request, echoed back unchanged.
        ticket: FetchTicket,
        /// Translated verses in chapter order.
        verses: Vec<TranslatedVerse>,
    },

    /// An operation failed. The event thread keeps its previous state.
    Error {
        /// Which operation failed.
        operation: String,
        /// Human-readable error message.
        message: String,
        /// Ticket of the failed fetch, if it was a translation request.
        ticket: Option<FetchTicket>,
    },
}
