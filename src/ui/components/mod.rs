//! Composable UI component renderers.
//!
//! Each component appends one part of a screen to an output buffer. The two
//! layout functions assemble them:
//!
//! - [`render_chapter_list`]: Header + Search line + Chapter rows + Footer
//! - [`render_verse_list`]: Header + Verse blocks + Footer
//!
//! Output is line-oriented with no cursor positioning, so it can be printed
//! once or captured in tests.

mod empty;
mod footer;
mod header;

use crate::ui::helpers::{char_width, push_border, truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ChapterListView, VerseListView};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;

/// Width of the chapter number column.
const NUMBER_WIDTH: usize = 4;

/// Width of the Arabic name column.
const NAME_WIDTH: usize = 18;

/// Renders the chapter list screen.
///
/// ```text
/// [Header]
/// [Border]
/// [Search: query]
/// [   1  الفاتحة            Al-Fatihah             7 ayahs]
/// ...
/// [Border]
/// [Footer: sort order | theme]
/// ```
pub fn render_chapter_list(out: &mut String, view: &ChapterListView, theme: &Theme, cols: usize) {
    render_header(out, &view.title, theme, cols);
    push_border(out, &theme.colors.border, cols);

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&truncate(&format!(" Search: {}", view.query), cols));
    out.push_str(Theme::reset());
    out.push('\n');

    if view.items.is_empty() {
        let subtitle = if view.query.is_empty() {
            "Check the data file path"
        } else {
            "Try a different search"
        };
        render_empty_state(out, "No surahs found", subtitle, theme, cols);
    }

    for item in &view.items {
        let count = format!("{} ayahs", item.verse_count);
        let fixed = NUMBER_WIDTH + 2 + NAME_WIDTH + 1 + char_width(&count);
        let translit_width = cols.saturating_sub(fixed + 1);

        let name = truncate(&item.name, NAME_WIDTH);
        let translit = truncate(&item.transliteration, translit_width);

        out.push_str(&Theme::fg(&theme.colors.text));
        out.push_str(&format!("{:>width$}  ", item.id, width = NUMBER_WIDTH));
        out.push_str(&name);
        out.push_str(&" ".repeat(NAME_WIDTH.saturating_sub(char_width(&name)) + 1));
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&translit);
        out.push_str(&" ".repeat(translit_width.saturating_sub(char_width(&translit)) + 1));
        out.push_str(&count);
        out.push_str(Theme::reset());
        out.push('\n');
    }

    push_border(out, &theme.colors.border, cols);
    let mode = if view.dark { "dark" } else { "light" };
    render_footer(out, &format!("{} | {mode}", view.sort_label), theme, cols);
}

/// Renders the verse list screen.
///
/// Each verse is a numbered block followed by its translation, if any. The
/// sequencer's current verse is drawn bold in the highlight color, playing or
/// paused.
pub fn render_verse_list(out: &mut String, view: &VerseListView, theme: &Theme, cols: usize) {
    render_header(out, &view.title, theme, cols);
    push_border(out, &theme.colors.border, cols);

    if view.rows.is_empty() {
        render_empty_state(out, "No ayahs to show", "Go back to the surah list", theme, cols);
    }

    let text_width = cols.saturating_sub(NUMBER_WIDTH + 2).max(1);

    for row in &view.rows {
        if row.is_current {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.current_verse_fg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text));
        }

        let marker = format!("{:>width$}  ", format!("({})", row.number), width = NUMBER_WIDTH);
        for (i, line) in wrap(&row.text, text_width).iter().enumerate() {
            if i == 0 {
                out.push_str(&marker);
            } else {
                out.push_str(&" ".repeat(NUMBER_WIDTH + 2));
            }
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(Theme::reset());

        if let Some(translation) = &row.translation {
            out.push_str(&Theme::fg(&theme.colors.translation_fg));
            for line in wrap(translation, text_width) {
                out.push_str(&" ".repeat(NUMBER_WIDTH + 2));
                out.push_str(&line);
                out.push('\n');
            }
            out.push_str(Theme::reset());
        }
        out.push('\n');
    }

    push_border(out, &theme.colors.border, cols);
    let status = if view.is_playing { "playing" } else { "stopped" };
    render_footer(
        out,
        &format!(
            "{} | {} ({status}) | size {}",
            view.translator_label, view.reciter_label, view.font_size
        ),
        theme,
        cols,
    );
}
