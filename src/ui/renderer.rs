//! Frame entry point.

use crate::app::AppState;
use crate::ui::components;

/// Draws one frame of `state` into a `rows` × `cols` pane.
///
/// Rows are addressed absolutely and every line is padded to full width, so
/// the previous frame never needs clearing.
///
/// ```rust
/// use cinegrid::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// cinegrid::ui::render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let frame = state.compute_viewmodel(rows, cols);
    components::render_screen(&frame, &state.theme, cols, rows);
}
