//! Detail screen renderer.
//!
//! The body area is filled with the theme gradient, top to bottom, then the
//! heading, the poster and the text column are drawn over it:
//!
//! ```text
//!  Heat
//!
//!  ████████████████████    Popularity  84
//!  ████████████████████    Rating      7/10 (6512 votes)
//!  ████████████████████    Released    1995
//!  ████████████████████
//!  ████████████████████    Obsessive master thief Neil McCauley leads a
//!  ████████████████████    top-notch crew on various daring heists…
//! ```

use super::poster::render_poster;
use crate::ui::helpers::{display_width, position_cursor, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

const POSTER_COL: usize = 3;

/// Renders the detail body between `row` and `last_row` (inclusive).
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize, last_row: usize) {
    if last_row < row {
        return;
    }

    let height = last_row - row + 1;
    let backgrounds: Vec<String> = (0..height)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let position = if height > 1 { i as f32 / (height - 1) as f32 } else { 0.0 };
            theme.gradient_at(position)
        })
        .collect();

    for (i, background) in backgrounds.iter().enumerate() {
        position_cursor(row + i, 1);
        print!("{}{}{}", Theme::bg(background), " ".repeat(cols), Theme::reset());
    }

    let line = |offset: usize, col: usize, fg: &str, text: &str| {
        if let Some(background) = backgrounds.get(offset) {
            position_cursor(row + offset, col);
            print!("{}{}{text}{}", Theme::bg(background), Theme::fg(fg), Theme::reset());
        }
    };

    if let Some(top) = backgrounds.first() {
        position_cursor(row, POSTER_COL);
        print!("{}{}{}", Theme::bold(), Theme::bg(top), Theme::fg(&theme.colors.header_fg));
        print!("{}", truncate_text(&detail.title, cols.saturating_sub(POSTER_COL)));
        print!("{}", Theme::reset());
    }

    let poster_row = row + 2;
    render_poster(poster_row, POSTER_COL, detail.poster_size, detail.poster, theme, last_row);

    let text_col = POSTER_COL + detail.poster_size.width + 4;
    let text_width = cols.saturating_sub(text_col);
    let mut offset = 2;

    for (label, value) in facts(detail) {
        let text = format!("{label:<12}{value}");
        if display_width(&text) <= text_width {
            line(offset, text_col, &theme.colors.text_normal, &text);
        }
        offset += 1;
    }

    offset += 1;
    for overview_line in &detail.overview_lines {
        line(offset, text_col, &theme.colors.text_normal, overview_line);
        offset += 1;
    }
}

fn facts(detail: &DetailView) -> Vec<(&'static str, String)> {
    let mut facts = vec![
        ("Popularity", detail.popularity.clone()),
        ("Rating", format!("{} ({} votes)", detail.vote, detail.vote_count)),
    ];
    if let Some(year) = detail.release_year {
        facts.push(("Released", year.to_string()));
    }
    facts
}
