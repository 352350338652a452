//! Translator and translated-verse model.
//!
//! Translations carry no verse key. A chapter translation is a sequence whose
//! item at index `i` belongs to the chapter's verse at index `i`; that
//! positional contract is the only join there is, and [`translation_for`] is
//! the single place that performs it.

use serde::{Deserialize, Serialize};

/// A translation edition offered by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translator {
    /// Edition code, e.g. `fa.makarem`.
    pub identifier: String,
    /// Language tag, e.g. `fa`.
    pub language: String,
    /// Localized display name.
    pub name: String,
    #[serde(rename = "englishName")]
    pub english_name: String,
}

/// One translated verse as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedVerse {
    /// Global verse number as reported by the API. Not used for alignment.
    pub number: u32,
    pub text: String,
}

/// Returns the translated text aligned with the verse at `index`.
///
/// A translation shorter than the chapter yields `None` for the trailing
/// verses instead of an out-of-range error.
#[must_use]
pub fn translation_for(translations: &[TranslatedVerse], index: usize) -> Option<&str> {
    translations.get(index).map(|t| t.text.as_str())
}
