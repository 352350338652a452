//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor the config set one.
const DEFAULT_LEVEL: &str = "info";

/// Resolves the filter directive: `RUST_LOG`, then `config.log_level`, then
/// [`DEFAULT_LEVEL`].
fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.log_level.as_deref().unwrap_or(DEFAULT_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}

/// Initializes the global tracing subscriber.
///
/// Events are written as plain text to `config.log_file`, or `ayah.log` in
/// the data directory, rotated at 10 MB with three backups. When the file
/// cannot be created the subscriber writes to stderr instead.
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// # Example
///
/// ```rust
/// use ayah::observability::init_tracing;
/// use ayah::Config;
///
/// let dir = tempfile::tempdir()?;
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     log_file: Some(dir.path().join("ayah.log")),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_tracing(config: &Config) {
    let log_file = config.log_path();

    if let Some(parent) = log_file.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let writer = Arc::new(FileWriter::new(log_file));

    let result = match writer.open() {
        Ok(()) => tracing_subscriber::registry()
            .with(build_filter(config))
            .with(fmt::layer().with_ansi(false).with_target(true).with_writer(writer))
            .try_init(),
        Err(_) => tracing_subscriber::registry()
            .with(build_filter(config))
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "tracing initialized");
    }
}
