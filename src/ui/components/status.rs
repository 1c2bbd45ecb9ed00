//! Load More button and fetch status line.

use crate::ui::helpers::{display_width, position_cursor, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders the status line at `row`.
///
/// # Layout
///
/// ```text
///  [ Load More (page 3) ]  Loading page 3…
/// ```
///
/// The button is drawn in the accent color when enabled and dimmed while a
/// fetch is in flight or the catalog is exhausted. Errors use `error_fg`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let button = format!("[ {} ]", status.load_more.label);

    position_cursor(row, 1);
    print!(" ");
    if status.load_more.enabled {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    } else {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    }
    print!("{button}");
    print!("{}", Theme::reset());

    let used = 1 + display_width(&button);
    if let Some(message) = &status.message {
        let color = if status.is_error {
            &theme.colors.error_fg
        } else {
            &theme.colors.text_dim
        };
        let message = truncate_text(message, cols.saturating_sub(used + 2));
        print!("  {}{message}{}", Theme::fg(color), Theme::reset());
    }

    row + 1
}
