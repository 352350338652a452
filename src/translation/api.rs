//! Translation API abstraction.
//!
//! The [`TranslationApi`] trait is the seam between the worker and the
//! network. The worker only depends on this trait, so tests drive it with an
//! in-memory implementation instead of a live server.

use crate::domain::error::Result;
use crate::domain::{TranslatedVerse, Translator};

/// Read-only access to translation editions and chapter translations.
///
/// Calls are one-shot: no retry, no caching. Implementations must be `Send`
/// so they can move onto the worker thread.
pub trait TranslationApi: Send {
    /// Lists the available translator editions.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success API response.
    fn list_translators(&self) -> Result<Vec<Translator>>;

    /// Fetches one chapter translated by one translator, in verse order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success API response.
    fn fetch_translation(&self, chapter_id: u32, translator_id: &str) -> Result<Vec<TranslatedVerse>>;
}
