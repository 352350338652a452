//! Ayah: the core of a Quran reader.
//!
//! Ayah provides:
//! - A read-only store of the 114 chapters loaded from a bundled JSON file
//! - Case-insensitive chapter search with ascending/descending ordering
//! - Verse-by-verse recitation sequencing with selectable reciters
//! - Remote translations fetched on a background worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Front end (main.rs CLI, or an embedding UI)        │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │               │               │               │
//! ┌─────────────┐ ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//! │ UI (ui/)    │ │ Storage     │ │ Playback    │ │ Worker      │
//! │ - Rendering │ │ (storage/)  │ │ (playback/) │ │ (worker/)   │
//! │ - Theming   │ │ - JSON load │ │ - Sequencer │ │ - Fetches   │
//! │             │ │ - Query     │ │             │ │ (translation/)
//! └─────────────┘ └─────────────┘ └─────────────┘ └─────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Chapters, translators, reciters, errors (domain/)│
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types and errors
//! - [`infrastructure`]: Platform paths
//! - [`storage`]: Chapter content loading and the query engine
//! - [`playback`]: Recitation sequencer
//! - [`translation`]: Translation API client
//! - [`worker`]: Background worker running translation fetches
//! - [`ui`]: View models, themes and ANSI rendering
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! Read from `~/.config/ayah/config.toml` (or `--config PATH`), then
//! overridden by `--set key=value` pairs:
//!
//! ```toml
//! data_file = "~/.local/share/ayah/quran.json"
//! translator_language = "fa"
//! theme = "dark"
//! font_size = 20
//! log_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use ayah::{handle_event, Action, AppState, Event, Theme};
//! use ayah::storage::{ContentStore, JsonStrSource};
//!
//! let source = JsonStrSource::new(
//!     r#"[{"id":1,"name":"الفاتحة","transliteration":"Al-Fatihah","type":"meccan",
//!          "total_verses":2,"verses":[{"id":1,"text":"a"},{"id":2,"text":"b"}]}]"#,
//! );
//! let mut state = AppState::new(ContentStore::load(&source), Theme::default());
//!
//! handle_event(&mut state, &Event::OpenChapter(1))?;
//! let (_, actions) = handle_event(&mut state, &Event::TogglePlayback)?;
//! assert_eq!(
//!     actions,
//!     vec![Action::PlayAudio {
//!         url: "https://quranaudio.pages.dev/1/1_1.mp3".to_string(),
//!         verse_index: 0,
//!     }]
//! );
//! # Ok::<(), ayah::AyahError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod playback;
pub mod storage;
pub mod translation;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, Screen};
pub use domain::{AyahError, Chapter, Reciter, Result, TranslatedVerse, Translator, Verse};
pub use ui::Theme;

use crate::app::DEFAULT_FONT_SIZE;
use crate::domain::DEFAULT_AUDIO_BASE_URL;
use crate::infrastructure::{expand_tilde, get_config_file, get_data_dir, DATA_FILE_NAME, LOG_FILE_NAME};
use crate::storage::{ContentStore, JsonFileSource};
use crate::translation::DEFAULT_API_BASE_URL;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Reader configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Chapter content file. Default: `<data dir>/quran.json`
    pub data_file: PathBuf,

    /// Translation API root. Default: `https://api.alquran.cloud/v1`
    pub api_base_url: String,

    /// Root of the per-verse recitation files.
    pub audio_base_url: String,

    /// Language of the translator editions offered. Default: `"fa"`
    pub translator_language: String,

    /// Edition format requested from the API. Default: `"text"`
    pub translator_format: String,

    /// Built-in theme name (`light`, `dark`) or path to a theme TOML file.
    pub theme: Option<String>,

    /// Initial verse text size. Default: 18
    pub font_size: u16,

    /// Log filter, e.g. `debug` or `ayah=trace`. Overridden by `RUST_LOG`.
    pub log_level: Option<String>,

    /// Log file. Default: `<data dir>/ayah.log`
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: get_data_dir().join(DATA_FILE_NAME),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            audio_base_url: DEFAULT_AUDIO_BASE_URL.to_string(),
            translator_language: "fa".to_string(),
            translator_format: "text".to_string(),
            theme: None,
            font_size: DEFAULT_FONT_SIZE,
            log_level: None,
            log_file: None,
        }
    }
}

fn expand_path(path: &Path) -> PathBuf {
    path.to_str().map_or_else(|| path.to_path_buf(), |s| PathBuf::from(expand_tilde(s)))
}

impl Config {
    /// Parses a TOML config document.
    ///
    /// # Errors
    ///
    /// Returns [`AyahError::Config`] on malformed TOML, unknown keys or
    /// mistyped values.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config: Self = toml::from_str(document).map_err(|e| AyahError::Config(e.to_string()))?;
        Ok(config.expanded())
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`AyahError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AyahError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Loads the config from `path`, or from the default location when it
    /// exists, or falls back to defaults.
    ///
    /// # Errors
    ///
    /// Fails if an explicit `path` is unreadable, or if any file found is
    /// malformed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = get_config_file();
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Builds a config from `key = value` pairs over the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use ayah::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("translator_language".to_string(), "en".to_string());
    /// map.insert("font_size".to_string(), "22".to_string());
    ///
    /// let config = Config::from_map(&map)?;
    /// assert_eq!(config.translator_language, "en");
    /// assert_eq!(config.font_size, 22);
    /// # Ok::<(), ayah::AyahError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Config::apply_overrides`].
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(map)?;
        Ok(config)
    }

    /// Applies `key = value` overrides on top of this config.
    ///
    /// # Errors
    ///
    /// Returns [`AyahError::Config`] for an unknown key or a `font_size`
    /// that is not a number.
    pub fn apply_overrides(&mut self, map: &BTreeMap<String, String>) -> Result<()> {
        for (key, value) in map {
            match key.as_str() {
                "data_file" => self.data_file = expand_path(Path::new(value)),
                "api_base_url" => self.api_base_url.clone_from(value),
                "audio_base_url" => self.audio_base_url.clone_from(value),
                "translator_language" => self.translator_language.clone_from(value),
                "translator_format" => self.translator_format.clone_from(value),
                "theme" => self.theme = Some(value.clone()),
                "font_size" => {
                    self.font_size = value
                        .trim()
                        .parse()
                        .map_err(|_| AyahError::Config(format!("font_size must be a number, got {value:?}")))?;
                }
                "log_level" => self.log_level = Some(value.clone()),
                "log_file" => self.log_file = Some(expand_path(Path::new(value))),
                other => return Err(AyahError::Config(format!("unknown config key {other:?}"))),
            }
        }
        Ok(())
    }

    /// Log file path, explicit or under the data directory.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| get_data_dir().join(LOG_FILE_NAME))
    }

    fn expanded(mut self) -> Self {
        self.data_file = expand_path(&self.data_file);
        self.log_file = self.log_file.as_deref().map(expand_path);
        self
    }

    /// Resolves the configured theme: a built-in name first, then a file
    /// path, then the default light theme.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        let Some(theme) = &self.theme else {
            return Theme::default();
        };

        Theme::from_name(theme).unwrap_or_else(|| {
            Theme::from_file(expand_tilde(theme)).unwrap_or_else(|e| {
                tracing::warn!(theme = %theme, error = %e, "failed to load theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state from configuration.
///
/// Loads chapter content from `config.data_file` (an unreadable file yields
/// an empty store, logged), resolves the theme, and applies the font size
/// and audio root.
///
/// # Example
///
/// ```rust
/// use ayah::{initialize, Config};
///
/// let config = Config {
///     data_file: "/nonexistent/quran.json".into(),
///     font_size: 24,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert!(state.content.is_empty());
/// assert_eq!(state.font_size, 24);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize", data_file = %config.data_file.display()).entered();

    let content = ContentStore::load(&JsonFileSource::new(config.data_file.clone()));
    tracing::info!(chapters = content.len(), "content loaded");

    let mut state = AppState::new(content, config.resolve_theme());
    state.set_font_size(config.font_size);
    state.audio_base_url.clone_from(&config.audio_base_url);
    state
}
