//! Poster slot painter.
//!
//! A poster slot is a rectangle of terminal cells. Its look depends on the load
//! state:
//!
//! ```text
//! Loaded        Loading       Placeholder
//! ██████████    ┌────────┐    ░░░░░░░░░░
//! ██████████    │loading │    ░░░░░░░░░░
//! ██████████    └────────┘    ░░░░░░░░░░
//! ```

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CellSize, PosterView};

/// Paints a poster slot with its top-left corner at `(row, col)`.
///
/// Lines past `last_row` are not drawn.
pub fn render_poster(row: usize, col: usize, size: CellSize, view: PosterView, theme: &Theme, last_row: usize) {
    if size.width == 0 || size.height == 0 {
        return;
    }

    for line in 0..size.height {
        let current = row + line;
        if current > last_row {
            break;
        }
        position_cursor(current, col);
        match view {
            PosterView::Loaded => {
                print!("{}", Theme::fg(&theme.colors.poster_fill));
                print!("{}", "█".repeat(size.width));
            }
            PosterView::Placeholder => {
                print!("{}", Theme::fg(&theme.colors.poster_placeholder));
                print!("{}", "░".repeat(size.width));
            }
            PosterView::Loading => {
                print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
                print!("{}", loading_frame_line(line, size));
            }
        }
        print!("{}", Theme::reset());
    }
}

/// One line of the dim loading frame, with a label on the middle line.
fn loading_frame_line(line: usize, size: CellSize) -> String {
    let inner = size.width.saturating_sub(2);
    if size.width < 2 {
        return "·".repeat(size.width);
    }
    if line == 0 {
        return format!("┌{}┐", "─".repeat(inner));
    }
    if line + 1 == size.height {
        return format!("└{}┘", "─".repeat(inner));
    }

    let label = if line == size.height / 2 { "loading" } else { "" };
    if label.len() > inner {
        return format!("│{}│", " ".repeat(inner));
    }
    let left = (inner - label.len()) / 2;
    format!("│{}{label}{}│", " ".repeat(left), " ".repeat(inner - left - label.len()))
}
