//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It serves as the single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the accumulated catalog, fetch status, poster
//! states) from derived state (the filtered list and the selection). View models
//! are computed on demand from state snapshots.
//!
//! # State Components
//!
//! - **Store**: every movie fetched this session plus the next page cursor
//! - **Coordinator**: the single outstanding catalog request
//! - **Filtered**: the store after applying the search query
//! - **Selection**: index into the filtered list
//! - **Layout / Screen**: grid or list, catalog or detail
//! - **Posters**: per-URL poster load state
//!
//! # Windowing
//!
//! The catalog body shows as many card rows as fit between the chrome rows. The
//! window is centered on the selected row and pinned to the end of the list when
//! near it. Posters are requested only for cards inside the window.
//!
//! # Example
//!
//! ```rust
//! use cinegrid::api::ApiSettings;
//! use cinegrid::app::AppState;
//! use cinegrid::ui::theme::Theme;
//! use cinegrid::ui::viewmodel::Body;
//!
//! let state = AppState::new(Theme::default(), ApiSettings::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(matches!(viewmodel.body, Body::Empty(_)));
//! ```

use super::actions::Action;
use super::modes::{InputMode, LayoutMode, Screen, SearchFocus};
use crate::api::{decode_catalog, ApiSettings, RequestContext};
use crate::catalog::{self, AppendPolicy, CatalogStore, FetchCoordinator, FetchOutcome, FetchStatus};
use crate::domain::MovieItem;
use crate::posters::{PosterBook, PosterState};
use crate::ui::helpers::{truncate_text, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, CardItem, CatalogLayout, DetailView, EmptyState, FooterInfo, GridLayout,
    HeaderInfo, ListLayout, LoadMoreButton, PosterView, SearchBarInfo, StatusInfo, UIViewModel,
    DETAIL_POSTER, GRID_POSTER, LIST_POSTER,
};
use std::ops::Range;

/// Rows used by the blank line, header, borders, status line and footer.
const CHROME_ROWS: usize = 6;

/// Extra rows used by the search box.
const SEARCH_BAR_ROWS: usize = 3;

/// Narrowest overview column on the detail screen.
const MIN_OVERVIEW_WIDTH: usize = 20;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every movie fetched during the session, in arrival order.
    pub store: CatalogStore,

    /// Tracks the in-flight catalog request and applies completions.
    pub coordinator: FetchCoordinator,

    /// Movies matching the current search query.
    ///
    /// Recomputed by `apply_search_filter()` after the store or the query
    /// changes. Used for rendering and selection bounds checking.
    pub filtered: Vec<MovieItem>,

    /// Zero-based index of the selected movie within `filtered`.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Current search query string.
    pub search_query: String,

    pub layout: LayoutMode,

    pub screen: Screen,

    /// Color scheme for UI rendering, including the detail gradient.
    pub theme: Theme,

    pub posters: PosterBook,

    /// Endpoint and credentials used to build requests.
    pub api: ApiSettings,

    /// Fetch the first page as soon as web access is granted.
    pub autoload: bool,
}

impl AppState {
    /// Creates an empty catalog in grid layout.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cinegrid::api::ApiSettings;
    /// use cinegrid::app::AppState;
    /// use cinegrid::ui::theme::Theme;
    ///
    /// let state = AppState::new(Theme::default(), ApiSettings::default());
    /// assert_eq!(state.store.current_page(), 1);
    /// assert_eq!(state.selected_index, 0);
    /// ```
    #[must_use]
    pub fn new(theme: Theme, api: ApiSettings) -> Self {
        Self {
            store: CatalogStore::new(),
            coordinator: FetchCoordinator::new(AppendPolicy::default()),
            filtered: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            layout: LayoutMode::default(),
            screen: Screen::Catalog,
            theme,
            posters: PosterBook::new(),
            api,
            autoload: true,
        }
    }

    /// Moves the selection one card row down, clamping at the end.
    ///
    /// In the grid, moving down from a row whose neighbour below is missing
    /// lands on the last card.
    pub fn move_selection_down(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        let columns = self.layout.columns();
        if self.selected_index + columns < len {
            self.selected_index += columns;
        } else if (len - 1) / columns > self.selected_index / columns {
            self.selected_index = len - 1;
        }
    }

    /// Moves the selection one card row up, clamping at the start.
    pub fn move_selection_up(&mut self) {
        let columns = self.layout.columns();
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    /// Moves the selection one column left within the current grid row.
    pub fn move_selection_left(&mut self) {
        if self.selected_index % self.layout.columns() > 0 {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection one column right within the current grid row.
    pub fn move_selection_right(&mut self) {
        let columns = self.layout.columns();
        let at_row_end = self.selected_index % columns == columns - 1;
        if !at_row_end && self.selected_index + 1 < self.filtered.len() {
            self.selected_index += 1;
        }
    }

    /// Returns the selected movie, if any.
    #[must_use]
    pub fn selected_movie(&self) -> Option<&MovieItem> {
        self.filtered.get(self.selected_index)
    }

    /// Recomputes `filtered` from the store and the query, clamping the selection.
    pub fn apply_search_filter(&mut self) {
        self.filtered = catalog::filter(self.store.items(), &self.search_query);

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }
    }

    #[must_use]
    pub const fn is_searching(&self) -> bool {
        matches!(self.input_mode, InputMode::Search(_))
    }

    /// Enters search mode with an empty query and the cursor in the input.
    pub fn begin_search(&mut self) {
        self.input_mode = InputMode::Search(SearchFocus::Typing);
        self.edit_query(String::clear);
    }

    /// Leaves search mode and shows the whole catalog again.
    pub fn end_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.edit_query(String::clear);
    }

    /// Applies `edit` to the query and refilters.
    pub fn edit_query(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.search_query);
        self.apply_search_filter();
    }

    /// Starts a fetch of the store's current page.
    ///
    /// Returns `None` when a fetch is already in flight or the catalog is
    /// exhausted.
    pub fn request_next_page(&mut self) -> Option<Action> {
        let page = self.store.current_page();
        if !self.coordinator.begin(page) {
            return None;
        }

        Some(Action::FetchCatalogPage {
            url: self.api.page_url(page),
            headers: self.api.headers(),
            context: RequestContext::CatalogPage { page },
        })
    }

    /// Applies a catalog response for `page` and refreshes the filtered list.
    pub fn apply_catalog_response(&mut self, page: u32, status: u16, body: &[u8]) -> FetchOutcome {
        let response = decode_catalog(status, body);
        let outcome = self.coordinator.complete(&mut self.store, page, response);
        if matches!(outcome, FetchOutcome::Appended { .. }) {
            self.apply_search_filter();
        }
        outcome
    }

    /// Emits poster requests for every visible movie not requested yet.
    ///
    /// Called right before rendering, with the same pane height.
    pub fn request_visible_posters(&mut self, rows: usize) -> Vec<Action> {
        let urls: Vec<String> = match &self.screen {
            Screen::Detail(movie) => self.api.poster_url(&movie.poster_path).into_iter().collect(),
            Screen::Catalog => self.filtered[self.visible_range(rows)]
                .iter()
                .filter_map(|movie| self.api.poster_url(&movie.poster_path))
                .collect(),
        };

        urls.into_iter()
            .filter(|url| self.posters.request(url))
            .map(|url| Action::FetchPoster {
                context: RequestContext::Poster { url: url.clone() },
                url,
            })
            .collect()
    }

    /// How the poster of `movie` should be drawn right now.
    #[must_use]
    pub fn poster_view(&self, movie: &MovieItem) -> PosterView {
        let Some(url) = self.api.poster_url(&movie.poster_path) else {
            return PosterView::Placeholder;
        };
        match self.posters.state(&url) {
            Some(PosterState::Resolved { .. }) => PosterView::Loaded,
            Some(PosterState::Failed) => PosterView::Placeholder,
            Some(PosterState::Loading) | None => PosterView::Loading,
        }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match &self.screen {
            Screen::Detail(movie) => Body::Detail(self.compute_detail(movie, cols)),
            Screen::Catalog if self.filtered.is_empty() => Body::Empty(self.compute_empty_state()),
            Screen::Catalog => Body::Catalog(self.compute_catalog(rows, cols)),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            status: self.compute_status(),
        }
    }

    /// Height of one card row in terminal rows.
    const fn card_row_height(&self) -> usize {
        match self.layout {
            LayoutMode::Grid => GRID_POSTER.height + 2,
            LayoutMode::List => LIST_POSTER.height + 1,
        }
    }

    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(CHROME_ROWS),
            InputMode::Search(_) => total_rows.saturating_sub(CHROME_ROWS + SEARCH_BAR_ROWS),
        }
    }

    /// Indices into `filtered` of the cards inside the visible window.
    fn visible_range(&self, rows: usize) -> Range<usize> {
        let len = self.filtered.len();
        if len == 0 {
            return 0..0;
        }

        let columns = self.layout.columns();
        let visible_rows = (self.calculate_available_rows(rows) / self.card_row_height()).max(1);
        let total_rows = (len + columns - 1) / columns;
        let selected_row = self.selected_index / columns;

        let mut start_row = selected_row.saturating_sub(visible_rows / 2);
        let end_row = (start_row + visible_rows).min(total_rows);
        if end_row - start_row < visible_rows && total_rows >= visible_rows {
            start_row = end_row - visible_rows;
        }

        (start_row * columns)..(end_row * columns).min(len)
    }

    fn compute_catalog(&self, rows: usize, cols: usize) -> CatalogLayout {
        let range = self.visible_range(rows);
        match self.layout {
            LayoutMode::Grid => {
                let columns = self.layout.columns();
                let column_width = cols / columns;
                let title_width = column_width.saturating_sub(2);
                CatalogLayout::Grid(GridLayout {
                    cards: self.compute_cards(range, title_width),
                    columns,
                    poster: GRID_POSTER,
                    column_width,
                })
            }
            LayoutMode::List => {
                let title_width = cols.saturating_sub(LIST_POSTER.width + 6);
                CatalogLayout::List(ListLayout {
                    cards: self.compute_cards(range, title_width),
                    poster: LIST_POSTER,
                })
            }
        }
    }

    fn compute_cards(&self, range: Range<usize>, title_width: usize) -> Vec<CardItem> {
        let offset = range.start;
        self.filtered[range]
            .iter()
            .enumerate()
            .map(|(relative_idx, movie)| {
                let title = truncate_text(&movie.title, title_width);
                let highlight_ranges = self.compute_highlight_ranges(&movie.title, &title);
                CardItem {
                    title,
                    poster: self.poster_view(movie),
                    is_selected: offset + relative_idx == self.selected_index,
                    highlight_ranges,
                }
            })
            .collect()
    }

    /// Match ranges of the full title, cut down to the part that survived clipping.
    fn compute_highlight_ranges(&self, full: &str, shown: &str) -> Vec<(usize, usize)> {
        if !matches!(self.input_mode, InputMode::Search(_)) {
            return vec![];
        }

        let visible_chars = if shown == full {
            full.chars().count()
        } else {
            shown.chars().count().saturating_sub(1)
        };

        catalog::match_ranges(full, &self.search_query)
            .into_iter()
            .filter(|&(start, _)| start < visible_chars)
            .map(|(start, end)| (start, end.min(visible_chars)))
            .collect()
    }

    fn compute_detail(&self, movie: &MovieItem, cols: usize) -> DetailView {
        let text_width = cols
            .saturating_sub(DETAIL_POSTER.width + 8)
            .max(MIN_OVERVIEW_WIDTH);

        DetailView {
            title: movie.title.clone(),
            poster: self.poster_view(movie),
            poster_size: DETAIL_POSTER,
            popularity: movie.popularity_label(),
            vote: movie.vote_label(),
            vote_count: movie.vote_count,
            release_year: movie.release_year(),
            overview_lines: wrap_text(&movie.overview, text_width),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let total = self.store.len();
        let title = match &self.screen {
            Screen::Detail(movie) => format!(" {} ", movie.title),
            Screen::Catalog if catalog::is_active(&self.search_query) => {
                format!(" Popular Movies ({}/{total}) ", self.filtered.len())
            }
            Screen::Catalog => format!(" Popular Movies ({total}) "),
        };
        let icon = self.layout.toggle_icon();

        HeaderInfo {
            title,
            toggle_glyph: icon.glyph(),
            toggle_icon: icon.identifier(),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.store.is_empty() {
            let subtitle = if self.coordinator.is_in_flight() {
                "Fetching the first page…".to_string()
            } else {
                "Press m to load the first page".to_string()
            };
            EmptyState {
                message: "No movies loaded".to_string(),
                subtitle,
            }
        } else {
            EmptyState {
                message: format!("No matches for \"{}\"", self.search_query),
                subtitle: "Press m to load more, or Esc to clear the search".to_string(),
            }
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.screen, self.input_mode) {
            (Screen::Detail(_), _) => "Esc: back  q: quit",
            (Screen::Catalog, InputMode::Search(SearchFocus::Typing)) => {
                "Esc: exit search  Enter: open  Ctrl+n/p: navigate  Tab: results  Type to filter"
            }
            (Screen::Catalog, InputMode::Search(SearchFocus::Navigating)) => {
                "Esc: exit search  /: edit query  hjkl: navigate  Enter: open  m: load more"
            }
            (Screen::Catalog, InputMode::Normal) => {
                "hjkl: navigate  Enter: open  /: search  t: grid/list  m: load more  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let InputMode::Search(focus) = self.input_mode else {
            return None;
        };
        let hint = (!catalog::is_active(&self.search_query))
            .then(|| format!("type {}+ characters to filter", catalog::MIN_QUERY_CHARS));

        Some(SearchBarInfo {
            query: self.search_query.clone(),
            typing: focus == SearchFocus::Typing,
            hint,
        })
    }

    fn compute_status(&self) -> StatusInfo {
        let page = self.store.current_page();
        let exhausted = self.coordinator.is_exhausted();

        let (message, is_error) = match self.coordinator.status() {
            FetchStatus::InFlight { page } => (Some(format!("Loading page {page}…")), false),
            FetchStatus::Failed { page, reason } => (
                Some(format!("Failed to load page {page}: {reason}. Press m to retry")),
                true,
            ),
            FetchStatus::Idle if exhausted => (Some("End of catalog".to_string()), false),
            FetchStatus::Idle => (None, false),
        };

        StatusInfo {
            load_more: LoadMoreButton {
                label: format!("Load More (page {page})"),
                enabled: !self.coordinator.is_in_flight() && !exhausted,
            },
            message,
            is_error,
        }
    }
}
