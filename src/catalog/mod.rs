//! Catalog paging and search.
//!
//! - [`store`]: append-only item list with the page cursor
//! - [`filter`]: pure substring search over the accumulated items
//! - [`coordinator`]: single-flight fetch bookkeeping and append policy

pub mod coordinator;
pub mod filter;
pub mod store;

pub use coordinator::{AppendPolicy, FetchCoordinator, FetchOutcome, FetchStatus};
pub use filter::{filter, is_active, match_ranges, MIN_QUERY_CHARS};
pub use store::{CatalogStore, PAGE_SIZE};
