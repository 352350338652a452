//! Domain layer for the reader core.
//!
//! This module contains the core domain types, independent of storage, network
//! or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`chapter`]: Chapter and verse model loaded from the bundled document
//! - [`translation`]: Translator editions and positional verse translations
//! - [`reciter`]: Fixed reciter list and audio URL template
//!
//! # Examples
//!
//! ```
//! use ayah::domain::{Chapter, Result, Verse};
//!
//! fn opening() -> Result<Chapter> {
//!     Ok(Chapter {
//!         id: 1,
//!         name: "الفاتحة".to_string(),
//!         transliteration: "Al-Fatihah".to_string(),
//!         kind: "meccan".to_string(),
//!         total_verses: 1,
//!         verses: vec![Verse { id: 1, text: "بِسْمِ اللَّهِ".to_string() }],
//!     })
//! }
//!
//! assert!(opening().unwrap().is_consistent());
//! ```

pub mod chapter;
pub mod error;
pub mod reciter;
pub mod translation;

pub use chapter::{Chapter, Verse};
pub use error::{AyahError, Result};
pub use reciter::{Reciter, DEFAULT_AUDIO_BASE_URL, RECITERS};
pub use translation::{translation_for, TranslatedVerse, Translator};
