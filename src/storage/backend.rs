//! Content source abstraction.
//!
//! This module defines the [`ContentSource`] trait that abstracts over where
//! the bundled chapter document comes from: a file shipped next to the binary,
//! a document embedded at compile time, or a fixture in tests.
//!
//! # Design Philosophy
//!
//! The trait is a single total read. There is no streaming and no incremental
//! update; a source either produces the whole chapter list or fails.

use crate::domain::error::Result;
use crate::domain::Chapter;

/// Abstraction over the origin of the bundled chapter document.
///
/// # Implementations
///
/// - [`JsonFileSource`](crate::storage::JsonFileSource): reads a JSON file from disk
/// - [`JsonStrSource`](crate::storage::JsonStrSource): parses an in-memory JSON document
pub trait ContentSource {
    /// Reads and parses every chapter in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or does not match the
    /// chapter schema. Implementations never return partial results.
    fn read(&self) -> Result<Vec<Chapter>>;

    /// Short description used in log fields.
    fn describe(&self) -> String;
}
