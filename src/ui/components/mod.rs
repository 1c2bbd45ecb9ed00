//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the layout toggle icon
//! - [`search`]: Search input box
//! - [`grid`] / [`list`]: The two catalog layouts
//! - [`poster`]: Poster slot painter shared by both layouts and the detail screen
//! - [`detail`]: Detail screen over the theme gradient
//! - [`empty`]: Empty state message
//! - [`status`]: Load More button and fetch status
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Body: grid, list, detail or empty state]
//! [Status line]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod grid;
mod header;
mod list;
mod poster;
mod search;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, CatalogLayout, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use list::render_list;
use search::render_search_bar;
use status::render_status;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole screen for a view model.
///
/// Reserves 6 lines for chrome (blank, header, 2 borders, status, footer), plus
/// 3 for the search bar when present. The body gets the rest.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let status_row = border_row.saturating_sub(1);
    let last_body_row = status_row.saturating_sub(1);

    match &vm.body {
        Body::Catalog(CatalogLayout::Grid(grid)) => {
            render_grid(current_row, grid, theme, last_body_row);
        }
        Body::Catalog(CatalogLayout::List(list)) => {
            render_list(current_row, list, theme, cols, last_body_row);
        }
        Body::Detail(detail) => render_detail(current_row, detail, theme, cols, last_body_row),
        Body::Empty(empty) => render_empty_state(current_row, empty, theme, cols),
    }

    render_status(status_row, &vm.status, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
