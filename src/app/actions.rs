//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after each event. The plugin shim
//! executes them in order: hiding the pane or issuing web requests. Keeping
//! effects as data leaves [`handle_event`](super::handle_event) testable
//! without a Zellij host.
//!
//! # Example
//!
//! ```rust
//! use cinegrid::api::RequestContext;
//! use cinegrid::app::Action;
//!
//! let action = Action::FetchPoster {
//!     url: "https://image.tmdb.org/t/p/w92/a.jpg".to_string(),
//!     context: RequestContext::Poster { url: "https://image.tmdb.org/t/p/w92/a.jpg".to_string() },
//! };
//! assert!(matches!(action, Action::FetchPoster { .. }));
//! ```

use crate::api::RequestContext;
use std::collections::BTreeMap;

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Requests one catalog page with an HTTP GET.
    FetchCatalogPage {
        url: String,
        headers: BTreeMap<String, String>,
        /// Returned with the response to route it back to the coordinator.
        context: RequestContext,
    },

    /// Requests a poster image with an HTTP GET.
    FetchPoster {
        url: String,
        context: RequestContext,
    },
}
