//! Shared rendering utilities and helpers.
//!
//! Low-level text utilities used across UI components: cursor positioning,
//! search match highlighting, and display-width aware clipping and wrapping.
//! Widths are terminal columns as reported by `unicode-width`, so wide
//! (e.g. CJK) titles line up with ASCII ones.
//!
//! # Example
//!
//! ```rust
//! use cinegrid::ui::helpers::{truncate_text, wrap_text};
//!
//! assert_eq!(truncate_text("The Shawshank Redemption", 10), "The Shaws…");
//! assert_eq!(wrap_text("a quiet town with a secret", 12), ["a quiet town", "with a", "secret"]);
//! ```

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Clips `text` to at most `max_width` columns, ending with `…` when clipped.
#[must_use]
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;

    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if width + char_width + 1 > max_width {
            break;
        }
        result.push(ch);
        width += char_width;
    }

    result + "…"
}

/// Word-wraps `text` into lines of at most `width` columns.
///
/// Whitespace runs collapse to single spaces. Words wider than `width` are
/// split across lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if line.is_empty() { word_width } else { line_width + 1 + word_width };

        if needed <= width {
            if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let char_width = ch.width().unwrap_or(0);
            if line_width + char_width > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(ch);
            line_width += char_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Left and right padding that centers `text` in `cols` columns.
///
/// Odd slack goes to the right.
#[must_use]
pub fn centering(text: &str, cols: usize) -> (usize, usize) {
    let slack = cols.saturating_sub(text.width());
    (slack / 2, slack - slack / 2)
}

/// Prints `text` centered on `row`, filling the whole line in `style`.
pub fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let (left, right) = centering(text, cols);
    position_cursor(row, 1);
    print!("{style}{:left$}{text}{:right$}{}", "", "", Theme::reset());
}

/// Prints text with highlighted character ranges for search matches.
///
/// Ranges use character indices with exclusive end; out-of-range ends are
/// clamped. When `is_selected` is `true`, highlighting is skipped so the
/// selection colors stay intact.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_text("Heat", 10), "Heat");
        assert_eq!(truncate_text("Heat", 4), "Heat");
    }

    #[test]
    fn truncation_respects_wide_characters() {
        let clipped = truncate_text("千と千尋の神隠し", 7);
        assert_eq!(clipped, "千と千…");
        assert!(display_width(&clipped) <= 7);
        assert_eq!(truncate_text("anything", 0), "");
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap_text("Two imprisoned men bond over a number of years", 16);
        assert_eq!(lines, ["Two imprisoned", "men bond over a", "number of years"]);
        assert!(lines.iter().all(|l| display_width(l) <= 16));
    }

    #[test]
    fn centering_splits_slack() {
        assert_eq!(centering("abc", 10), (3, 4));
        assert_eq!(centering("千と", 8), (2, 2));
        assert_eq!(centering("too wide", 4), (0, 0));
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert!(wrap_text("   ", 10).is_empty());
    }
}
