//! Poster loading state.
//!
//! Posters are fetched through the same host `web_request` path as catalog
//! pages. [`PosterBook`] remembers, per URL, whether the image is still
//! loading, arrived, or failed. Each URL is requested at most once per session
//! and entries are never evicted.

use std::collections::HashMap;

/// Renderable state of one poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterState {
    /// Requested, no response yet.
    Loading,
    /// Image bytes arrived.
    Resolved {
        /// Size of the downloaded image in bytes.
        bytes: usize,
    },
    /// The request failed, or the movie has no poster.
    Failed,
}

/// Per-URL poster states for the session.
#[derive(Debug, Clone, Default)]
pub struct PosterBook {
    states: HashMap<String, PosterState>,
}

impl PosterBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State for `url`, or `None` if it was never requested.
    #[must_use]
    pub fn state(&self, url: &str) -> Option<PosterState> {
        self.states.get(url).copied()
    }

    /// Marks `url` as loading if it has not been requested before.
    ///
    /// Returns `true` when the caller should issue the request.
    pub fn request(&mut self, url: &str) -> bool {
        if self.states.contains_key(url) {
            return false;
        }
        self.states.insert(url.to_string(), PosterState::Loading);
        true
    }

    /// Records the response for `url`.
    ///
    /// Empty bodies count as failures since there is nothing to display.
    pub fn resolve(&mut self, url: &str, success: bool, bytes: usize) {
        let state = if success && bytes > 0 {
            PosterState::Resolved { bytes }
        } else {
            tracing::debug!(url, bytes, "poster failed to load");
            PosterState::Failed
        };
        self.states.insert(url.to_string(), state);
    }
}
