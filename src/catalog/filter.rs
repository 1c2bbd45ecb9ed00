//! Search-as-you-type filtering over the accumulated catalog.
//!
//! Filtering is a pure function of the full list and the query. Queries shorter
//! than [`MIN_QUERY_CHARS`] characters leave the list untouched; longer ones
//! keep the titles that contain the query as a case-insensitive substring.

use crate::domain::MovieItem;

/// Minimum query length, in characters, before filtering applies.
pub const MIN_QUERY_CHARS: usize = 3;

/// Whether `query` is long enough to filter.
#[must_use]
pub fn is_active(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

/// Returns the movies whose titles contain `query`, ignoring case.
///
/// Order is preserved and duplicates are kept. Short queries return `all`
/// unchanged.
///
/// ```
/// use cinegrid::catalog::filter;
/// use cinegrid::MovieItem;
///
/// let all = vec![
///     MovieItem::new(1, "Batman"),
///     MovieItem::new(2, "Batgirl"),
///     MovieItem::new(3, "Superman"),
/// ];
/// let titles: Vec<_> = filter(&all, "bat").into_iter().map(|m| m.title).collect();
/// assert_eq!(titles, ["Batman", "Batgirl"]);
/// ```
#[must_use]
pub fn filter(all: &[MovieItem], query: &str) -> Vec<MovieItem> {
    let _span = tracing::debug_span!("filter", total = all.len(), query_chars = query.chars().count()).entered();

    if !is_active(query) {
        return all.to_vec();
    }

    let needle = query.to_lowercase();
    let filtered: Vec<MovieItem> = all
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    tracing::debug!(matched = filtered.len(), "search filter applied");
    filtered
}

/// Character ranges of `title` matching `query`, for highlighting.
///
/// Ranges are `(start, end)` character indices with exclusive end. Returns no
/// ranges when the query is inactive, or when lowercasing changes the title's
/// character count (so indices would not line up).
#[must_use]
pub fn match_ranges(title: &str, query: &str) -> Vec<(usize, usize)> {
    if !is_active(query) {
        return vec![];
    }

    let hay: Vec<char> = title.to_lowercase().chars().collect();
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if hay.len() != title.chars().count() || needle.is_empty() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= hay.len() {
        if hay[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}
