//! User interface layer: view models, themes and an ANSI renderer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Screen layouts and their parts
//! - [`helpers`]: Width-aware text utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    ChapterItem, ChapterListView, UIViewModel, VerseListView, VerseRow, NO_TRANSLATOR_LABEL, UNKNOWN_CHAPTER_TITLE,
};
