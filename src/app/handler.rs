//! The plugin's state machine.
//!
//! The shim turns key presses and host callbacks into [`Event`]s;
//! [`handle_event`] updates [`AppState`] and answers with whether to redraw
//! plus the [`Action`]s the shim must perform (HTTP requests, hiding the
//! pane). Nothing here talks to Zellij directly.
//!
//! Web completions are routed by the context map that travelled with the
//! request: catalog pages go to the fetch coordinator, posters to the poster
//! book. On the detail screen, movement and `Select` are ignored.
//!
//! # Example
//!
//! ```rust
//! use cinegrid::api::ApiSettings;
//! use cinegrid::app::{handle_event, Action, AppState, Event};
//! use cinegrid::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default(), ApiSettings::default());
//! let (render, actions) = handle_event(&mut state, &Event::LoadMore)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::FetchCatalogPage { .. }));
//! # Ok::<(), cinegrid::CinegridError>(())
//! ```

use super::modes::{InputMode, Screen, SearchFocus};
use crate::api::{is_success, RequestContext};
use crate::app::{Action, AppState};
use crate::catalog::FetchOutcome;
use crate::domain::error::Result;
use std::collections::BTreeMap;

/// Events triggered by user input or the plugin host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection one row down.
    MoveDown,
    /// Moves the selection one row up.
    MoveUp,
    /// Moves the selection one column left (grid only).
    MoveLeft,
    /// Moves the selection one column right (grid only).
    MoveRight,
    /// Opens the detail screen for the selected movie.
    Select,
    /// Pops the detail screen, or leaves search mode.
    Back,
    /// Hides the plugin pane.
    CloseFocus,
    /// Flips between grid and list layout.
    ToggleLayout,
    /// Requests the store's current page.
    LoadMore,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,

    /// Reports whether the requested permissions were granted.
    ///
    /// Triggers the first page fetch when `autoload` is set.
    PermissionsResult {
        granted: bool,
    },

    /// Completion of a web request issued by an action.
    WebResponse {
        status: u16,
        body: Vec<u8>,
        /// The context map sent with the request.
        context: BTreeMap<String, String>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether the UI should re-render, and the actions to execute in order.
///
/// # Errors
///
/// Returns [`CinegridError::Unroutable`](crate::CinegridError::Unroutable) when a
/// web response carries a context map this plugin did not produce. Fetch
/// failures are not errors here; they are recorded in state and shown in the
/// status line.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    if matches!(state.screen, Screen::Detail(_))
        && matches!(
            event,
            Event::MoveDown | Event::MoveUp | Event::MoveLeft | Event::MoveRight | Event::Select
        )
    {
        return Ok((false, vec![]));
    }

    match event {
        Event::MoveDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::MoveLeft => {
            state.move_selection_left();
            Ok((true, vec![]))
        }
        Event::MoveRight => {
            state.move_selection_right();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Select => match state.selected_movie() {
            Some(movie) => {
                tracing::debug!(movie_id = movie.id, title = %movie.title, "opening detail screen");
                state.screen = Screen::Detail(Box::new(movie.clone()));
                Ok((true, vec![]))
            }
            // Enter on an empty result list abandons the search.
            None if state.is_searching() => {
                state.end_search();
                Ok((true, vec![]))
            }
            None => Ok((false, vec![])),
        },
        Event::Back => {
            if matches!(state.screen, Screen::Detail(_)) {
                state.screen = Screen::Catalog;
            } else if state.is_searching() {
                state.end_search();
            } else {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
        Event::ToggleLayout => {
            state.layout = state.layout.toggled();
            tracing::debug!(layout = ?state.layout, "layout toggled");
            Ok((true, vec![]))
        }
        Event::LoadMore => {
            let action = state.request_next_page();
            Ok((action.is_some(), action.into_iter().collect()))
        }
        Event::SearchMode => {
            state.begin_search();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults if state.search_query.is_empty() => {
            state.end_search();
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "leaving search");
            state.end_search();
            Ok((true, vec![]))
        }
        Event::Char(c) if state.input_mode == InputMode::Search(SearchFocus::Typing) => {
            state.edit_query(|query| query.push(*c));
            tracing::trace!(query = %state.search_query, "query edited");
            Ok((true, vec![]))
        }
        Event::Backspace if state.is_searching() => {
            state.edit_query(|query| {
                query.pop();
            });
            Ok((true, vec![]))
        }
        Event::Char(_) | Event::Backspace => Ok((false, vec![])),
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("web access denied - catalog cannot be fetched");
                return Ok((false, vec![]));
            }
            if !state.autoload || !state.store.is_empty() {
                return Ok((false, vec![]));
            }

            tracing::debug!("web access granted - fetching first page");
            let actions: Vec<Action> = state.request_next_page().into_iter().collect();
            Ok((!actions.is_empty(), actions))
        }
        Event::WebResponse {
            status,
            body,
            context,
        } => match RequestContext::from_map(context)? {
            RequestContext::CatalogPage { page } => {
                let outcome = state.apply_catalog_response(page, *status, body);
                tracing::debug!(page, status, outcome = ?outcome, "catalog response applied");
                Ok((outcome != FetchOutcome::Stale, vec![]))
            }
            RequestContext::Poster { url } => {
                state.posters.resolve(&url, is_success(*status), body.len());
                Ok((true, vec![]))
            }
        },
    }
}

/// Short event label for spans, without request bodies.
fn event_name(event: &Event) -> String {
    match event {
        Event::WebResponse { status, context, .. } => format!(
            "WebResponse({status}, {})",
            context.get("kind").map_or("?", String::as_str)
        ),
        other => format!("{other:?}"),
    }
}
