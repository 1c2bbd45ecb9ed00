//! Single-flight coordination of catalog page fetches.
//!
//! At most one catalog fetch is outstanding. A "load more" request while one is
//! in flight is refused rather than queued. Completions are matched against the
//! page that was requested, and the configured [`AppendPolicy`] decides how a
//! returned batch lands in the [`CatalogStore`].

use super::store::{CatalogStore, PAGE_SIZE};
use crate::domain::{CatalogPage, CinegridError, Result};
use std::str::FromStr;

/// How a successful page response is folded into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppendPolicy {
    /// Append the first [`PAGE_SIZE`] items of each batch.
    ///
    /// If the append did not move the cursor (short batch), the cursor is
    /// advanced anyway so the next request asks for a new page.
    #[default]
    WholePage,

    /// Append one item per completion, `batch[len % PAGE_SIZE]`.
    ///
    /// Each "load more" yields a single movie and the cursor only moves
    /// after twenty completions.
    OnePerCompletion,
}

impl FromStr for AppendPolicy {
    type Err = CinegridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "page" | "whole" => Ok(Self::WholePage),
            "single" | "one" => Ok(Self::OnePerCompletion),
            other => Err(CinegridError::Config(format!(
                "unknown append_mode '{other}' (expected 'page' or 'single')"
            ))),
        }
    }
}

/// Lifecycle of the catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    InFlight {
        page: u32,
    },
    Failed {
        page: u32,
        reason: String,
    },
}

/// Result of applying a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The batch was applied; `appended` items were added to the store.
    Appended { appended: usize },
    /// The request failed; the store is unchanged.
    Failed,
    /// The completion does not match the in-flight request and was dropped.
    Stale,
}

/// Owns the single outstanding catalog request.
#[derive(Debug, Clone, Default)]
pub struct FetchCoordinator {
    policy: AppendPolicy,
    status: FetchStatus,
    exhausted: bool,
}

impl FetchCoordinator {
    #[must_use]
    pub fn new(policy: AppendPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn policy(&self) -> AppendPolicy {
        self.policy
    }

    #[must_use]
    pub const fn status(&self) -> &FetchStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self.status, FetchStatus::InFlight { .. })
    }

    /// Whether the server has reported that no further pages exist.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Marks `page` as requested.
    ///
    /// Returns `false` without changing state when a fetch is already in
    /// flight or the catalog is exhausted.
    pub fn begin(&mut self, page: u32) -> bool {
        if let FetchStatus::InFlight { page: pending } = self.status {
            tracing::debug!(pending, requested = page, "fetch already in flight, ignoring load more");
            return false;
        }
        if self.exhausted {
            tracing::debug!(requested = page, "catalog exhausted, ignoring load more");
            return false;
        }

        tracing::debug!(page, "catalog fetch started");
        self.status = FetchStatus::InFlight { page };
        true
    }

    /// Applies the completion of the request for `page`.
    ///
    /// Failures leave the store untouched and are kept for the status line.
    pub fn complete(
        &mut self,
        store: &mut CatalogStore,
        page: u32,
        response: Result<CatalogPage>,
    ) -> FetchOutcome {
        if self.status != (FetchStatus::InFlight { page }) {
            tracing::debug!(page, status = ?self.status, "dropping completion for a page not in flight");
            return FetchOutcome::Stale;
        }

        match response {
            Ok(batch) => {
                self.status = FetchStatus::Idle;
                let total = batch.total_pages;
                let last_page = batch.items.is_empty()
                    || total.is_some_and(|total| batch.page_number >= total);
                let appended = self.apply(store, batch);
                // A single-item completion only drains one slot of the page,
                // so the last page keeps loading until the cursor passes it.
                self.exhausted = match self.policy {
                    AppendPolicy::WholePage => last_page,
                    AppendPolicy::OnePerCompletion => {
                        appended == 0 || total.is_some_and(|total| store.current_page() > total)
                    }
                };
                if self.exhausted {
                    tracing::debug!(page, "catalog exhausted");
                }
                FetchOutcome::Appended { appended }
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "catalog fetch failed");
                self.status = FetchStatus::Failed {
                    page,
                    reason: e.to_string(),
                };
                FetchOutcome::Failed
            }
        }
    }

    fn apply(&self, store: &mut CatalogStore, batch: CatalogPage) -> usize {
        match self.policy {
            AppendPolicy::WholePage => {
                let cursor_before = store.current_page();
                let appended = store.append_page(batch.items.into_iter().take(PAGE_SIZE));
                if store.current_page() == cursor_before {
                    store.advance_page();
                }
                appended
            }
            AppendPolicy::OnePerCompletion => {
                let index = store.len() % PAGE_SIZE;
                match batch.items.into_iter().nth(index) {
                    Some(movie) => {
                        store.push(movie);
                        1
                    }
                    None => {
                        tracing::warn!(index, "batch too short for single-item append");
                        0
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MovieItem;

    fn page(number: u32, count: u64) -> CatalogPage {
        CatalogPage {
            page_number: number,
            items: (0..count)
                .map(|i| MovieItem::new(u64::from(number) * 100 + i, format!("P{number} #{i}")))
                .collect(),
            total_pages: Some(50),
            total_results: Some(1000),
        }
    }

    #[test]
    fn second_load_more_is_debounced() {
        let mut coordinator = FetchCoordinator::default();
        assert!(coordinator.begin(1));
        assert!(!coordinator.begin(1));
        assert_eq!(coordinator.status(), &FetchStatus::InFlight { page: 1 });
    }

    #[test]
    fn whole_page_appends_batch_and_advances() {
        let mut store = CatalogStore::new();
        let mut coordinator = FetchCoordinator::new(AppendPolicy::WholePage);

        coordinator.begin(1);
        let outcome = coordinator.complete(&mut store, 1, Ok(page(1, 20)));

        assert_eq!(outcome, FetchOutcome::Appended { appended: 20 });
        assert_eq!(store.len(), 20);
        assert_eq!(store.current_page(), 2);
        assert_eq!(coordinator.status(), &FetchStatus::Idle);
    }

    #[test]
    fn oversized_batch_is_truncated_to_page_size() {
        let mut store = CatalogStore::new();
        let mut coordinator = FetchCoordinator::new(AppendPolicy::WholePage);

        coordinator.begin(1);
        coordinator.complete(&mut store, 1, Ok(page(1, 25)));

        assert_eq!(store.len(), PAGE_SIZE);
        assert_eq!(store.current_page(), 2);
    }

    #[test]
    fn short_batch_still_moves_to_next_page() {
        let mut store = CatalogStore::new();
        let mut coordinator = FetchCoordinator::new(AppendPolicy::WholePage);

        coordinator.begin(1);
        coordinator.complete(&mut store, 1, Ok(page(1, 15)));
        assert_eq!(store.current_page(), 2);

        coordinator.begin(2);
        coordinator.complete(&mut store, 2, Ok(page(2, 20)));
        assert_eq!(store.len(), 35);
        assert_eq!(store.current_page(), 3);
    }

    #[test]
    fn one_per_completion_cycles_through_batch() {
        let mut store = CatalogStore::new();
        let mut coordinator = FetchCoordinator::new(AppendPolicy::OnePerCompletion);

        for expected_len in 1..=20_usize {
            let requested = store.current_page();
            assert!(coordinator.begin(requested));
            coordinator.complete(&mut store, requested, Ok(page(requested, 20)));
            assert_eq!(store.len(), expected_len);
        }

        let ids: Vec<u64> = store.items().iter().map(|m| m.id).collect();
        assert_eq!(ids, (100..120).collect::<Vec<_>>());
        assert_eq!(store.current_page(), 2);

        coordinator.begin(2);
        coordinator.complete(&mut store, 2, Ok(page(2, 20)));
        assert_eq!(store.items()[20].id, 200);
    }

    #[test]
    fn one_per_completion_drains_the_last_page_before_exhausting() {
        let mut store = CatalogStore::new();
        let mut coordinator = FetchCoordinator::new(AppendPolicy::OnePerCompletion);
        let mut only = page(1, 20);
        only.total_pages = Some(1);

        for expected_len in 1..=20_usize {
            assert!(coordinator.begin(1), "stopped after {} items", store.len());
            coordinator.complete(&mut store, 1, Ok(only.clone()));
            assert_eq!(store.len(), expected_len);
        }

        assert!(coordinator.is_exhausted());
        assert!(!coordinator.begin(2));
    }

    #[test]
    fn one_per_completion_short_batch_appends_nothing() {
        let mut store = CatalogStore::new();
        let mut coordinator = FetchCoordinator::new(AppendPolicy::OnePerCompletion);

        coordinator.begin(1);
        coordinator.complete(&mut store, 1, Ok(page(1, 1)));
        assert_eq!(store.len(), 1);

        coordinator.begin(1);
        let outcome = coordinator.complete(&mut store, 1, Ok(page(1, 1)));

        assert_eq!(outcome, FetchOutcome::Appended { appended: 0 });
        assert_eq!(store.len(), 1);
        assert_eq!(store.current_page(), 1);
        assert!(coordinator.is_exhausted());
    }

    #[test]
    fn empty_batch_exhausts_catalog() {
        let mut store = CatalogStore::new();
        let mut coordinator = FetchCoordinator::default();

        coordinator.begin(1);
        coordinator.complete(&mut store, 1, Ok(page(1, 20)));
        assert!(!coordinator.is_exhausted());

        coordinator.begin(2);
        let outcome = coordinator.complete(&mut store, 2, Ok(page(2, 0)));

        assert_eq!(outcome, FetchOutcome::Appended { appended: 0 });
        assert!(coordinator.is_exhausted());
        assert!(!coordinator.begin(3));
    }

    #[test]
    fn failure_leaves_store_untouched_and_allows_retry() {
        let mut store = CatalogStore::new();
        let mut coordinator = FetchCoordinator::default();

        coordinator.begin(1);
        let outcome = coordinator.complete(
            &mut store,
            1,
            Err(CinegridError::Http { status: 500, message: None }),
        );

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(store.is_empty());
        assert_eq!(store.current_page(), 1);
        assert!(matches!(coordinator.status(), FetchStatus::Failed { page: 1, .. }));
        assert!(coordinator.begin(1));
    }

    #[test]
    fn completion_for_other_page_is_stale() {
        let mut store = CatalogStore::new();
        let mut coordinator = FetchCoordinator::default();

        coordinator.begin(2);
        assert_eq!(coordinator.complete(&mut store, 1, Ok(page(1, 20))), FetchOutcome::Stale);
        assert!(store.is_empty());
        assert!(coordinator.is_in_flight());
    }

    #[test]
    fn last_page_exhausts_catalog() {
        let mut store = CatalogStore::new();
        let mut coordinator = FetchCoordinator::default();

        let mut last = page(3, 7);
        last.total_pages = Some(3);
        coordinator.begin(3);
        coordinator.complete(&mut store, 3, Ok(last));

        assert!(coordinator.is_exhausted());
        assert!(!coordinator.begin(4));
    }

    #[test]
    fn append_policy_parses_config_values() {
        assert_eq!("page".parse::<AppendPolicy>().unwrap(), AppendPolicy::WholePage);
        assert_eq!(" Single ".parse::<AppendPolicy>().unwrap(), AppendPolicy::OnePerCompletion);
        assert!("bulk".parse::<AppendPolicy>().is_err());
    }
}
