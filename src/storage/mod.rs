//! Storage layer for the bundled chapter content.
//!
//! This module loads the read-only chapter document and answers the chapter
//! list query over it.
//!
//! # Modules
//!
//! - `backend`: Content source trait abstraction
//! - `json`: JSON file and in-memory document sources
//! - `store`: Process-wide immutable chapter store
//! - `query`: Substring filter and id ordering for the chapter list

pub mod backend;
pub mod json;
pub mod query;
pub mod store;

pub use backend::ContentSource;
pub use json::{JsonFileSource, JsonStrSource};
pub use query::{filter, SortOrder};
pub use store::{load, ContentStore};
