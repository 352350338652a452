//! Footer component renderer.
//!
//! Renders a dimmed, centered status line (sort order, translator, reciter).
//! Text wider than the terminal is truncated to keep the layout intact.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;

/// Appends the footer line.
pub fn render_footer(out: &mut String, text: &str, theme: &Theme, cols: usize) {
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, text, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
