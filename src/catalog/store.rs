//! Append-only catalog store with a page cursor.
//!
//! The store accumulates every movie fetched during the session, in arrival
//! order, duplicates included. The cursor names the next page to request and
//! moves forward by one each time the accumulated length crosses a multiple of
//! [`PAGE_SIZE`].

use crate::domain::MovieItem;

/// Number of items the catalog API returns per page.
pub const PAGE_SIZE: usize = 20;

/// Accumulated catalog items and the next page to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    items: Vec<MovieItem>,
    next_page: u32,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Creates an empty store whose cursor points at page 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            next_page: 1,
        }
    }

    /// Appends items in order and advances the cursor for every page boundary
    /// crossed.
    ///
    /// Returns the number of items appended.
    ///
    /// ```
    /// use cinegrid::catalog::CatalogStore;
    /// use cinegrid::MovieItem;
    ///
    /// let mut store = CatalogStore::new();
    /// store.append_page((0..19).map(|i| MovieItem::new(i, "x")));
    /// assert_eq!(store.current_page(), 1);
    /// store.append_page([MovieItem::new(19, "y")]);
    /// assert_eq!(store.current_page(), 2);
    /// ```
    pub fn append_page<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = MovieItem>,
    {
        let before = self.items.len();
        self.items.extend(items);
        let after = self.items.len();

        let crossed = after / PAGE_SIZE - before / PAGE_SIZE;
        if crossed > 0 {
            let step = u32::try_from(crossed).unwrap_or(u32::MAX);
            self.next_page = self.next_page.saturating_add(step);
        }

        tracing::debug!(
            appended = after - before,
            total = after,
            next_page = self.next_page,
            "catalog items appended"
        );

        after - before
    }

    /// Appends a single item, applying the same page rule as [`append_page`](Self::append_page).
    pub fn push(&mut self, item: MovieItem) {
        self.append_page(std::iter::once(item));
    }

    /// Moves the cursor to the next page without appending.
    ///
    /// Used when a fetch succeeded but returned a short batch, so the next
    /// request does not repeat the same page.
    pub fn advance_page(&mut self) {
        self.next_page = self.next_page.saturating_add(1);
        tracing::debug!(next_page = self.next_page, "page cursor advanced explicitly");
    }

    /// The page number the next fetch should request (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.next_page
    }

    #[must_use]
    pub fn items(&self) -> &[MovieItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
