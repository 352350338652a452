//! Filesystem locations and path expansion.
//!
//! Data lives under `$XDG_DATA_HOME/ayah`, falling back to
//! `$HOME/.local/share/ayah`, and the config file under
//! `$XDG_CONFIG_HOME/ayah/config.toml` or `$HOME/.config/ayah/config.toml`.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "ayah";

/// Name of the bundled chapter file inside the data directory.
pub const DATA_FILE_NAME: &str = "quran.json";

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "ayah.log";

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn home_dir() -> PathBuf {
    non_empty_var("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from)
}

/// Returns the data directory for chapter content and logs.
///
/// The directory is not created here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    non_empty_var("XDG_DATA_HOME")
        .map_or_else(|| home_dir().join(".local").join("share"), PathBuf::from)
        .join(APP_DIR)
}

/// Returns the default config file path, whether or not it exists.
#[must_use]
pub fn get_config_file() -> PathBuf {
    non_empty_var("XDG_CONFIG_HOME")
        .map_or_else(|| home_dir().join(".config"), PathBuf::from)
        .join(APP_DIR)
        .join("config.toml")
}

/// Expands a leading `~` to `$HOME`.
///
/// # Examples
///
/// ```
/// use ayah::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~"), "relative/~");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        return home_dir().to_string_lossy().into_owned();
    }

    path.strip_prefix("~/").map_or_else(
        || path.to_string(),
        |rest| home_dir().join(rest).to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_to_home() {
        let home = home_dir();
        assert_eq!(expand_tilde("~"), home.to_string_lossy());
        assert_eq!(
            PathBuf::from(expand_tilde("~/quran.json")),
            home.join("quran.json")
        );
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(get_data_dir().ends_with(APP_DIR));
        assert!(get_config_file().ends_with("ayah/config.toml"));
    }
}
