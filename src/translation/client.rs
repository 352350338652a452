//! Blocking HTTP client for the translation API.
//!
//! Endpoints (relative to the configured base URL):
//!
//! - `GET edition?format={format}&language={language}` → translator list
//! - `GET surah/{chapter}/{translator}` → chapter translation

use crate::domain::error::Result;
use crate::domain::{TranslatedVerse, Translator};
use crate::translation::api::TranslationApi;
use crate::translation::models::{TranslationResponse, TranslatorsResponse};
use crate::Config;

/// Default translation API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.alquran.cloud/v1";

/// `reqwest`-backed [`TranslationApi`] implementation.
#[derive(Debug, Clone)]
pub struct HttpTranslationClient {
    client: reqwest::blocking::Client,
    base_url: String,
    format: String,
    language: String,
}

impl HttpTranslationClient {
    /// Builds a client for `base_url`, listing editions filtered by `format`
    /// and `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    /// (e.g. TLS backend initialization failure).
    pub fn new(
        base_url: impl Into<String>,
        format: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            format: format.into(),
            language: language.into(),
        })
    }

    /// Builds a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`HttpTranslationClient::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_base_url.clone(),
            config.translator_format.clone(),
            config.translator_language.clone(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl TranslationApi for HttpTranslationClient {
    fn list_translators(&self) -> Result<Vec<Translator>> {
        let _span = tracing::debug_span!("http_list_translators",
            format = %self.format,
            language = %self.language
        )
        .entered();

        let response: TranslatorsResponse = self
            .client
            .get(self.url("edition"))
            .query(&[("format", self.format.as_str()), ("language", self.language.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        let translators = response.into_data()?;
        tracing::debug!(count = translators.len(), "translators received");
        Ok(translators)
    }

    fn fetch_translation(&self, chapter_id: u32, translator_id: &str) -> Result<Vec<TranslatedVerse>> {
        let _span = tracing::debug_span!("http_fetch_translation",
            chapter_id = chapter_id,
            translator_id = %translator_id
        )
        .entered();

        let response: TranslationResponse = self
            .client
            .get(self.url(&format!("surah/{chapter_id}/{translator_id}")))
            .send()?
            .error_for_status()?
            .json()?;

        let chapter = response.into_data()?;
        tracing::debug!(
            chapter_number = chapter.number,
            verse_count = chapter.ayahs.len(),
            "translation received"
        );
        Ok(chapter.ayahs)
    }
}
