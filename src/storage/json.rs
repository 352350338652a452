//! JSON content sources.
//!
//! The bundled document is a JSON array of chapter objects:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "الفاتحة",
//!     "transliteration": "Al-Fatihah",
//!     "type": "meccan",
//!     "total_verses": 7,
//!     "verses": [{ "id": 1, "text": "..." }]
//!   }
//! ]
//! ```

use crate::domain::error::{AyahError, Result};
use crate::domain::Chapter;
use crate::storage::backend::ContentSource;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Reads the chapter document from a file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ContentSource for JsonFileSource {
    fn read(&self) -> Result<Vec<Chapter>> {
        let _span = tracing::debug_span!("json_file_read", path = ?self.file_path).entered();

        let file = File::open(&self.file_path)?;
        let chapters: Vec<Chapter> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| AyahError::Content(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(chapter_count = chapters.len(), "chapter document parsed");
        Ok(chapters)
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}

/// Parses a chapter document held in memory, e.g. one embedded with
/// `include_str!`.
#[derive(Debug, Clone)]
pub struct JsonStrSource<'a> {
    document: &'a str,
}

impl<'a> JsonStrSource<'a> {
    #[must_use]
    pub const fn new(document: &'a str) -> Self {
        Self { document }
    }
}

impl ContentSource for JsonStrSource<'_> {
    fn read(&self) -> Result<Vec<Chapter>> {
        serde_json::from_str(self.document)
            .map_err(|e| AyahError::Content(format!("failed to parse JSON: {e}")))
    }

    fn describe(&self) -> String {
        format!("<inline {} bytes>", self.document.len())
    }
}
