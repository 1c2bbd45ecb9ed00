//! Placeholder body for an empty catalog or a search without matches.

use crate::ui::helpers::{print_centered, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Draws the message and its hint two rows below `row`, both centered.
///
/// ```text
///
///
///            No matches for "zzz"
///   Press m to load more, or Esc to clear the search
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate_text(&empty.message, cols);
    print_centered(row + 2, &message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let hint_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(row + 3, &truncate_text(&empty.subtitle, cols), &hint_style, cols);
}
