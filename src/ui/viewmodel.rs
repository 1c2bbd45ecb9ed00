//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: clipped titles, highlight
//! ranges, poster states and cell sizes.
//!
//! # Layout
//!
//! The catalog body is a tagged [`CatalogLayout`]: a two-column grid of poster
//! cards, or a single-column list. Poster dimensions are expressed in logical
//! units and converted to terminal cells with [`CellSize::from_logical`].
//!
//! # Example
//!
//! ```rust
//! use cinegrid::ui::viewmodel::{CellSize, GRID_POSTER, LIST_POSTER, DETAIL_POSTER};
//!
//! assert_eq!(GRID_POSTER, CellSize { width: 15, height: 12 });
//! assert_eq!(LIST_POSTER, CellSize { width: 7, height: 5 });
//! assert_eq!(DETAIL_POSTER, CellSize { width: 20, height: 15 });
//! ```

/// Logical units per terminal column.
pub const UNITS_PER_COLUMN: usize = 8;

/// Logical units per terminal row.
pub const UNITS_PER_ROW: usize = 16;

/// Poster size of a grid card (120×180 units).
pub const GRID_POSTER: CellSize = CellSize::from_logical(120, 180);

/// Poster size of a list row (50×75 units).
pub const LIST_POSTER: CellSize = CellSize::from_logical(50, 75);

/// Poster size on the detail screen (160×240 units).
pub const DETAIL_POSTER: CellSize = CellSize::from_logical(160, 240);

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Main content between the chrome rows.
    pub body: Body,

    pub footer: FooterInfo,

    /// Present while in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// "Load More" button and fetch status.
    pub status: StatusInfo,
}

/// Content of the main area.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Catalog(CatalogLayout),
    Detail(DetailView),
    Empty(EmptyState),
}

/// The catalog laid out as a grid or a list.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLayout {
    Grid(GridLayout),
    List(ListLayout),
}

impl CatalogLayout {
    /// Visible cards, in display order.
    #[must_use]
    pub fn cards(&self) -> &[CardItem] {
        match self {
            Self::Grid(grid) => &grid.cards,
            Self::List(list) => &list.cards,
        }
    }
}

/// Two-column grid of poster cards.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Visible cards, row-major.
    pub cards: Vec<CardItem>,
    pub columns: usize,
    pub poster: CellSize,
    /// Width of one column in terminal cells.
    pub column_width: usize,
}

/// Single-column list of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ListLayout {
    pub cards: Vec<CardItem>,
    pub poster: CellSize,
}

/// One movie in the grid or list.
#[derive(Debug, Clone, PartialEq)]
pub struct CardItem {
    /// Title, clipped to the available width.
    pub title: String,

    pub poster: PosterView,

    pub is_selected: bool,

    /// Character ranges of `title` matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// How a poster slot is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterView {
    /// Image arrived; drawn as a filled block.
    Loaded,
    /// Request pending; drawn as a dim frame.
    Loading,
    /// Failed or absent; drawn as a neutral grey block.
    Placeholder,
}

/// A rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: usize,
    pub height: usize,
}

impl CellSize {
    /// Converts a logical size to terminal cells, rounding up.
    #[must_use]
    pub const fn from_logical(width: usize, height: usize) -> Self {
        Self {
            width: (width + UNITS_PER_COLUMN - 1) / UNITS_PER_COLUMN,
            height: (height + UNITS_PER_ROW - 1) / UNITS_PER_ROW,
        }
    }
}

/// Detail screen for one movie.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// Screen heading.
    pub title: String,
    pub poster: PosterView,
    pub poster_size: CellSize,
    /// Popularity rounded and right-aligned in two columns.
    pub popularity: String,
    /// Vote average as `"N/10"`.
    pub vote: String,
    pub vote_count: u64,
    pub release_year: Option<i32>,
    /// Overview word-wrapped to the text column.
    pub overview_lines: Vec<String>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, including the item count.
    pub title: String,
    /// Glyph of the layout toggle icon.
    pub toggle_glyph: &'static str,
    /// Identifier of the layout toggle icon.
    pub toggle_icon: &'static str,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search  m: load more").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No movies loaded").
    pub message: String,

    /// Secondary explanatory text (e.g., "Press m to load the first page").
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
    /// Whether keystrokes edit the query.
    pub typing: bool,
    /// Hint shown after the query while it is too short to filter.
    pub hint: Option<String>,
}

/// Load More button and fetch status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub load_more: LoadMoreButton,
    /// Loading progress, last error, or end of catalog.
    pub message: Option<String>,
    pub is_error: bool,
}

/// The "Load More" control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreButton {
    pub label: String,
    /// `false` while a fetch is in flight or the catalog is exhausted.
    pub enabled: bool,
}
