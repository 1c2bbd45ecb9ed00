//! Grid layout renderer.
//!
//! Cards are laid out row-major, `columns` per row. Each card is a poster slot
//! with the title on the line below it:
//!
//! ```text
//!  ███████████████            ███████████████
//!  ███████████████            ███████████████
//!  The Batman                 Batgirl
//! ```

use super::poster::render_poster;
use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, GridLayout};

/// Renders the grid from `row` down to at most `last_row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_grid(row: usize, grid: &GridLayout, theme: &Theme, last_row: usize) -> usize {
    let row_height = grid.poster.height + 2;
    let mut current_row = row;

    for card_row in grid.cards.chunks(grid.columns.max(1)) {
        if current_row > last_row {
            break;
        }
        for (column, card) in card_row.iter().enumerate() {
            let col = column * grid.column_width + 2;
            render_poster(current_row, col, grid.poster, card.poster, theme, last_row);

            let title_row = current_row + grid.poster.height;
            if title_row <= last_row {
                render_card_title(title_row, col, card, theme, grid.column_width.saturating_sub(2));
            }
        }
        current_row += row_height;
    }

    current_row.min(last_row + 1)
}

fn render_card_title(row: usize, col: usize, card: &CardItem, theme: &Theme, width: usize) {
    position_cursor(row, col);

    if card.is_selected {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&card.title, &card.highlight_ranges, theme, card.is_selected);

    if card.is_selected {
        print!("{}", " ".repeat(width.saturating_sub(display_width(&card.title))));
    }
    print!("{}", Theme::reset());
}
