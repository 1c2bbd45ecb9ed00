//! Input, layout and screen state types.
//!
//! The application is in one of two input modes:
//! - **Normal**: navigation and commands
//! - **Search**: typing a query, or navigating the filtered results
//!
//! Independently, the catalog is laid out as a grid or a list, and the visible
//! screen is either the catalog or a pushed detail screen.
//!
//! # Example
//!
//! ```rust
//! use cinegrid::app::modes::{LayoutMode, ToggleIcon};
//!
//! let layout = LayoutMode::Grid;
//! assert_eq!(layout.toggle_icon(), ToggleIcon::ListRows);
//! assert_eq!(layout.toggled(), LayoutMode::List);
//! ```

use crate::domain::{CinegridError, MovieItem, Result};
use std::str::FromStr;

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the query.
    Typing,
    /// Keys move through the filtered results; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search(SearchFocus),
}

/// How the catalog is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Two columns of poster cards with the title below each poster.
    #[default]
    Grid,
    /// One row per movie with a small poster beside the title.
    List,
}

impl LayoutMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Number of cards per row.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Grid => 2,
            Self::List => 1,
        }
    }

    /// Icon shown on the toggle control while in this layout.
    ///
    /// The icon depicts the layout the toggle switches to.
    #[must_use]
    pub const fn toggle_icon(self) -> ToggleIcon {
        match self {
            Self::Grid => ToggleIcon::ListRows,
            Self::List => ToggleIcon::GridSquares,
        }
    }
}

impl FromStr for LayoutMode {
    type Err = CinegridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(CinegridError::Config(format!(
                "unknown layout '{other}' (expected 'grid' or 'list')"
            ))),
        }
    }
}

/// The two fixed icons of the layout toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    GridSquares,
    ListRows,
}

impl ToggleIcon {
    /// Stable identifier of the icon.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::GridSquares => "square.grid.2x2.fill",
            Self::ListRows => "rectangle.grid.1x2.fill",
        }
    }

    /// Terminal glyph used to draw the icon.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::GridSquares => "▦",
            Self::ListRows => "☰",
        }
    }
}

/// Which screen is visible.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Catalog,
    /// Detail screen pushed for the selected movie.
    Detail(Box<MovieItem>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_layout_and_icon() {
        let grid = LayoutMode::Grid;
        let list = grid.toggled();
        assert_eq!(list, LayoutMode::List);
        assert_eq!(list.toggled(), LayoutMode::Grid);
        assert_eq!(grid.toggle_icon().identifier(), "rectangle.grid.1x2.fill");
        assert_eq!(list.toggle_icon().identifier(), "square.grid.2x2.fill");
        assert_ne!(grid.toggle_icon().glyph(), list.toggle_icon().glyph());
    }

    #[test]
    fn layout_parses_from_config() {
        assert_eq!("List".parse::<LayoutMode>().unwrap(), LayoutMode::List);
        assert_eq!(" grid".parse::<LayoutMode>().unwrap(), LayoutMode::Grid);
        assert!("mosaic".parse::<LayoutMode>().is_err());
    }
}
