//! Shared rendering utilities.
//!
//! Widths are measured in `char`s, not bytes, so Arabic verse text and
//! transliterations with diacritics are padded sensibly.

use crate::ui::theme::Theme;

/// Number of characters in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if char_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Appends `text` centered within `cols`, padded on both sides.
///
/// Text wider than `cols` is truncated. When the padding cannot split evenly
/// the right side gets the extra space.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = char_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}

/// Appends a full-width separator line in the given color.
pub fn push_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Splits `text` into lines of at most `width` characters, breaking on
/// whitespace where possible.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = vec![];
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() { char_width(word) } else { char_width(&line) + 1 + char_width(word) };

        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }

        if char_width(word) > width {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                line = chunk.iter().collect();
            }
            continue;
        }

        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("الفاتحة", 10), "الفاتحة");
        assert_eq!(truncate("Al-Baqarah", 5), "Al-B…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn centered_fills_width() {
        let mut out = String::new();
        push_centered(&mut out, "abc", 8);
        assert_eq!(out, "  abc   ");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap("   ", 5).is_empty());
    }
}
