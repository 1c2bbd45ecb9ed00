//! List layout renderer: one row per movie, small poster on the left.

use super::poster::render_poster;
use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ListLayout;

/// Column where list posters start.
const POSTER_COL: usize = 2;

/// Renders list rows from `row` down to at most `last_row`.
///
/// The title sits on the poster's middle line. A selected row is marked with
/// `▶` and drawn in selection colors up to the right edge.
///
/// # Returns
///
/// The next available row position.
pub fn render_list(row: usize, list: &ListLayout, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let row_height = list.poster.height + 1;
    let title_col = POSTER_COL + list.poster.width + 2;
    let mut current_row = row;

    for card in &list.cards {
        if current_row > last_row {
            break;
        }

        render_poster(current_row, POSTER_COL, list.poster, card.poster, theme, last_row);

        let title_row = current_row + list.poster.height / 2;
        if title_row <= last_row {
            position_cursor(title_row, title_col);
            if card.is_selected {
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.selection_fg));
                print!("{}", Theme::bg(&theme.colors.selection_bg));
                print!("▶ ");
            } else {
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!("  ");
            }

            helpers::render_highlighted_text(&card.title, &card.highlight_ranges, theme, card.is_selected);

            if card.is_selected {
                let used = title_col + 2 + display_width(&card.title);
                print!("{}", " ".repeat(cols.saturating_sub(used)));
            }
            print!("{}", Theme::reset());
        }

        current_row += row_height;
    }

    current_row.min(last_row + 1)
}
