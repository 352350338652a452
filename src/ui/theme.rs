//! Theme management and ANSI escape sequence generation.
//!
//! The reader ships a light and a dark theme, both defined as TOML documents
//! under `themes/`. A custom theme can be loaded from a file with the same
//! layout.
//!
//! # TOML Format
//!
//! ```toml
//! name = "dark"
//! dark = true
//!
//! [colors]
//! text = "#ffffff"
//! text_dim = "#9e9e9e"
//! header_fg = "#ffffff"
//! current_verse_fg = "#64b5f6"
//! translation_fg = "#cccccc"
//! border = "#424242"
//! ```

use crate::domain::error::{AyahError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Color scheme for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Whether this is a dark scheme; drives the theme toggle.
    #[serde(default)]
    pub dark: bool,
    /// Color palette.
    pub colors: ThemeColors,
}

/// Color definitions, as hex strings (e.g. `"#000000"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeColors {
    /// Verse and list text.
    pub text: String,
    /// Secondary text (transliterations, footer).
    pub text_dim: String,
    /// Header title.
    pub header_fg: String,
    /// Highlight for the verse being recited.
    pub current_verse_fg: String,
    /// Translation text.
    pub translation_fg: String,
    /// Separator lines.
    pub border: String,
}

impl Theme {
    /// Loads a built-in theme by name (`light` or `dark`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => include_str!("../../themes/light.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AyahError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AyahError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents).map_err(|e| AyahError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Built-in light theme.
    #[must_use]
    pub fn light() -> Self {
        Self::from_name("light").unwrap_or_else(Self::monochrome)
    }

    /// Built-in dark theme.
    #[must_use]
    pub fn dark() -> Self {
        let mut theme = Self::from_name("dark").unwrap_or_else(Self::monochrome);
        theme.dark = true;
        theme
    }

    /// The built-in theme of the opposite brightness.
    #[must_use]
    pub fn toggled(&self) -> Self {
        if self.dark {
            Self::light()
        } else {
            Self::dark()
        }
    }

    fn monochrome() -> Self {
        Self {
            name: "monochrome".to_string(),
            dark: false,
            colors: ThemeColors {
                text: "#000000".to_string(),
                text_dim: "#555555".to_string(),
                header_fg: "#000000".to_string(),
                current_verse_fg: "#0000ff".to_string(),
                translation_fg: "#333333".to_string(),
                border: "#999999".to_string(),
            },
        }
    }

    /// Converts a hex color to an RGB tuple; white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_themes_parse() {
        let light = Theme::from_name("light").unwrap();
        let dark = Theme::from_name("dark").unwrap();
        assert!(!light.dark);
        assert!(dark.dark);
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn toggle_flips_brightness() {
        let theme = Theme::default();
        assert!(theme.toggled().dark);
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Theme::fg("#102030"), "\u{001b}[38;2;16;32;48m");
        assert_eq!(Theme::fg("nope"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_custom_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sepia.toml");
        std::fs::write(
            &path,
            r##"
name = "sepia"

[colors]
text = "#5b4636"
text_dim = "#8a7560"
header_fg = "#3e2f23"
current_verse_fg = "#a0522d"
translation_fg = "#6b5444"
border = "#c8b79e"
"##,
        )
        .unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.name, "sepia");
        assert!(!theme.dark);
        assert!(matches!(Theme::from_file(dir.path().join("missing.toml")), Err(AyahError::Theme(_))));
    }
}
