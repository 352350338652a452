//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the screen's layout function
//!
//! # Example
//!
//! ```rust
//! use ayah::app::AppState;
//! use ayah::storage::ContentStore;
//! use ayah::ui::{render_to_string, Theme};
//!
//! let state = AppState::new(ContentStore::default(), Theme::default());
//! let screen = render_to_string(&state.compute_viewmodel(), &state.theme, 60);
//! assert!(screen.contains("Surahs (0)"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the current screen to stdout.
pub fn render(state: &AppState, cols: usize) {
    let viewmodel = state.compute_viewmodel();
    print!("{}", render_to_string(&viewmodel, &state.theme, cols));
}

/// Renders a view model into an ANSI-styled string `cols` characters wide.
#[must_use]
pub fn render_to_string(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();

    match vm {
        UIViewModel::ChapterList(view) => components::render_chapter_list(&mut out, view, theme, cols),
        UIViewModel::VerseList(view) => components::render_verse_list(&mut out, view, theme, cols),
    }

    out
}
