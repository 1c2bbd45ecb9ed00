//! Framed search input.

use crate::ui::helpers::{display_width, position_cursor, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Blank columns on each side of the frame.
const MARGIN: usize = 5;

/// Draws the three-row search box starting at `row` and returns the row
/// after it.
///
/// ```text
///      ┌──────────────────────────────────────────────┐
///      │ Search: ba▏  type 3+ characters to filter    │
///      └──────────────────────────────────────────────┘
/// ```
///
/// The frame takes `search_bar_border` while typing and `border` once the
/// results have focus. The hint is dropped when it does not fit.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner = cols.saturating_sub(MARGIN * 2 + 2);
    let frame = Theme::fg(if search.typing {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    });
    let edge = |at: usize, left: char, right: char| {
        position_cursor(at, MARGIN + 1);
        print!("{frame}{left}{}{right}{}", "─".repeat(inner), Theme::reset());
    };

    edge(row, '┌', '┐');

    let cursor = if search.typing { "▏" } else { "" };
    let query = truncate_text(&format!(" Search: {}{cursor}", search.query), inner);
    let hint = search
        .hint
        .as_ref()
        .map(|h| format!("  {h}"))
        .filter(|h| display_width(&query) + display_width(h) <= inner)
        .unwrap_or_default();
    let fill = inner.saturating_sub(display_width(&query) + display_width(&hint));

    position_cursor(row + 1, MARGIN + 1);
    print!(
        "{frame}│{}{query}{}{}{hint}{}{:fill$}{frame}│{}",
        Theme::fg(&theme.colors.text_normal),
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        Theme::reset(),
        "",
        Theme::reset(),
    );

    edge(row + 2, '└', '┘');
    row + 3
}
