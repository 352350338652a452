//! Response envelopes of the translation API.
//!
//! Every endpoint wraps its payload in `{ "code", "status", "data" }`. These
//! types stay inside the translation layer; callers only ever see domain
//! types.

use crate::domain::error::{AyahError, Result};
use crate::domain::{TranslatedVerse, Translator};
use serde::Deserialize;

/// Generic `{code, status, data}` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwraps the payload, treating any non-200 code as an API error.
    ///
    /// # Errors
    ///
    /// Returns [`AyahError::Api`] when `code` is not 200.
    pub fn into_data(self) -> Result<T> {
        if self.code == 200 {
            Ok(self.data)
        } else {
            Err(AyahError::Api {
                code: self.code,
                status: self.status,
            })
        }
    }
}

/// Payload of `GET surah/{chapter}/{translator}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterTranslation {
    pub number: u32,
    pub name: String,
    #[serde(rename = "englishName")]
    pub english_name: String,
    pub ayahs: Vec<TranslatedVerse>,
}

pub type TranslatorsResponse = Envelope<Vec<Translator>>;
pub type TranslationResponse = Envelope<ChapterTranslation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_translation_payload() {
        let body = r#"{
            "code": 200,
            "status": "OK",
            "data": {
                "number": 1,
                "name": "سُورَةُ ٱلْفَاتِحَةِ",
                "englishName": "Al-Faatiha",
                "ayahs": [
                    {"number": 1, "text": "به نام خداوند", "numberInSurah": 1},
                    {"number": 2, "text": "ستایش مخصوص خداوند", "numberInSurah": 2}
                ]
            }
        }"#;

        let response: TranslationResponse = serde_json::from_str(body).unwrap();
        let data = response.into_data().unwrap();
        assert_eq!(data.english_name, "Al-Faatiha");
        assert_eq!(data.ayahs.len(), 2);
    }

    #[test]
    fn non_success_code_is_an_error() {
        let body = r#"{"code": 404, "status": "Not Found", "data": []}"#;
        let response: TranslatorsResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            response.into_data(),
            Err(AyahError::Api { code: 404, .. })
        ));
    }
}
