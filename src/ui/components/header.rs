//! Header component renderer.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;

/// Appends the centered, bold title bar.
pub fn render_header(out: &mut String, title: &str, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    push_centered(out, title, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
