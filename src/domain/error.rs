//! Error types for the reader core.
//!
//! This module defines the centralized error type [`AyahError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Most of these errors never reach a user: content and network failures are
//! logged and degrade to "show less" at the application layer.

use thiserror::Error;

/// The main error type for reader operations.
///
/// Consolidates everything that can go wrong while loading bundled content,
/// talking to the translation API, reading configuration, or communicating
/// with the background worker.
///
/// # Examples
///
/// ```
/// use ayah::AyahError;
///
/// fn validate_config() -> Result<(), AyahError> {
///     Err(AyahError::Config("font_size must be a number".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum AyahError {
    /// Bundled content could not be parsed.
    ///
    /// The string describes what was wrong with the document.
    #[error("Content error: {0}")]
    Content(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The translation API answered with a non-success envelope.
    #[error("API error {code}: {status}")]
    Api {
        /// Envelope `code` field.
        code: u16,
        /// Envelope `status` field.
        status: String,
    },

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AyahError {
    /// Returns a short message suitable for showing to a reader.
    ///
    /// Network errors are folded into a handful of friendly categories; other
    /// variants fall back to their `Display` text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(e) if e.is_timeout() => {
                "The request timed out. The translation server might be slow right now.".to_string()
            }
            Self::Http(e) if e.is_connect() || e.is_request() => {
                "Connection error. Please check your internet connection and try again.".to_string()
            }
            Self::Http(e) if e.is_decode() => {
                "Received an unexpected response format from the server.".to_string()
            }
            Self::Http(_) => "A network error occurred. Please try again later.".to_string(),
            Self::Api { code, .. } => format!("The translation server refused the request ({code})."),
            other => other.to_string(),
        }
    }
}

/// A specialized `Result` type for reader operations.
pub type Result<T> = std::result::Result<T, AyahError>;
