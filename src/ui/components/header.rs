//! Title bar.

use crate::ui::helpers::{display_width, print_centered, position_cursor, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Columns kept free at the right edge for the layout toggle glyph.
const TOGGLE_SLOT: usize = 3;

/// Draws the bold centered title, then the layout toggle glyph in the accent
/// color near the right edge.
///
/// ```text
///              Popular Movies (40)             ☰
/// ```
///
/// Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let mut style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&Theme::bg(bg));
    }

    let title = truncate_text(&header.title, cols.saturating_sub(2 * TOGGLE_SLOT));
    print_centered(row, &title, &style, cols);

    if cols > TOGGLE_SLOT {
        let glyph_col = cols + 1 - TOGGLE_SLOT.max(display_width(header.toggle_glyph) + 1);
        position_cursor(row, glyph_col);
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.accent),
            header.toggle_glyph,
            Theme::reset()
        );
    }
    row + 1
}
