//! Keybinding hint line.

use crate::ui::helpers::{print_centered, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the dimmed, centered hints on `row`, clipped so they never wrap.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hints = truncate_text(&footer.keybindings, cols);
    print_centered(row, &hints, &Theme::fg(&theme.colors.text_dim), cols);
    row + 1
}
