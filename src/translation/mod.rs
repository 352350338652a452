//! Remote translation fetching.
//!
//! # Modules
//!
//! - `api`: [`TranslationApi`] trait at the network seam
//! - `client`: blocking `reqwest` implementation
//! - `models`: `{code, status, data}` response envelopes

pub mod api;
pub mod client;
pub mod models;

pub use api::TranslationApi;
pub use client::{HttpTranslationClient, DEFAULT_API_BASE_URL};
