//! Empty state component renderer.
//!
//! Shown when the chapter list has nothing to display (no content loaded, or
//! no chapter matches the query) and when a verse screen has no verses.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;

/// Appends a centered message with a dimmed subtitle below it.
pub fn render_empty_state(out: &mut String, message: &str, subtitle: &str, theme: &Theme, cols: usize) {
    out.push('\n');
    out.push_str(&Theme::fg(&theme.colors.text));
    push_centered(out, message, cols);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, subtitle, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
