//! Terminal rendering.
//!
//! ```text
//! AppState ──compute_viewmodel──▶ UIViewModel ──components──▶ ANSI on stdout
//! ```
//!
//! Everything that depends on state (which cards are visible, truncated
//! titles, match ranges, status text) is decided while building the view
//! model, so components only place text and colors.
//!
//! - [`viewmodel`]: plain data for one frame, plus the logical poster sizes
//! - [`renderer`]: entry point called from the plugin's `render`
//! - [`components`]: one renderer per screen region
//! - [`helpers`]: width-aware clipping, wrapping, centering and highlighting
//! - [`theme`]: TOML themes, the detail gradient and escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Body, CardItem, CatalogLayout, CellSize, DetailView, EmptyState, FooterInfo, GridLayout,
    HeaderInfo, ListLayout, LoadMoreButton, PosterView, SearchBarInfo, StatusInfo, UIViewModel,
};
