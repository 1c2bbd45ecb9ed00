//! Zellij plugin wrapper and entry point.
//!
//! Thin layer between the Cinegrid library and the Zellij plugin API: it turns
//! key presses, permission results and web request completions into library
//! `Event`s, and executes the returned `Action`s with `web_request` and
//! `hide_self`.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; page 1 is fetched once granted
//! 3. **Update**: Map host events, delegate to `handle_event`, run actions
//! 4. **Render**: Fetch posters that just became visible, then draw
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Catalog, normal mode:
//! - `j`/`k`/`h`/`l` or arrows: Move selection
//! - `Enter`: Open detail
//! - `/`: Search
//! - `t`: Toggle grid / list
//! - `m`: Load more
//! - `q`: Close plugin
//!
//! Search mode, typing:
//! - Characters edit the query, arrows move, `Tab` focuses results
//! - `Enter`: Open detail
//! - `Esc`: Exit search
//!
//! Search mode, navigating results:
//! - `j`/`k`/`h`/`l` move, `/` or `Tab` returns to the query
//!
//! Detail screen:
//! - `Esc` / `Backspace`: Back to the catalog
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

// The shim only exists for the plugin target; natively the library and its
// tests build without a Zellij host.
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use cinegrid::{handle_event, Action, AppState, Config, Event, InputMode, Screen, SearchFocus};

    /// Plugin state wrapper around the library's `AppState`.
    pub(super) struct State {
        app: AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: cinegrid::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, installs tracing, asks for web access and
        /// subscribes to the events the plugin reacts to.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            cinegrid::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            tracing::debug!(api_url = %config.api.api_url, layout = ?config.layout, "parsed configuration");
            self.app = cinegrid::initialize(&config);

            request_permission(&[PermissionType::WebAccess]);
            subscribe(&[
                EventType::Key,
                EventType::PermissionRequestResult,
                EventType::WebRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        /// Returns `true` if the plugin should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let span_name = format!("plugin_update::{event_name}");
            let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                },
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    Event::WebResponse { status, body, context }
                }
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            for action in self.app.request_visible_posters(rows) {
                Self::execute_action(&action);
            }
            cinegrid::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                    format!("WebRequestResult({status})")
                }
                _ => "Other".to_string(),
            }
        }

        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::debug!(bare_key = ?key.bare_key, "key event");

            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::MoveDown),
                    BareKey::Char('p') => Some(Event::MoveUp),
                    _ => None,
                };
            }

            if matches!(self.app.screen, Screen::Detail(_)) {
                return match key.bare_key {
                    BareKey::Esc | BareKey::Backspace => Some(Event::Back),
                    BareKey::Char('q') => Some(Event::CloseFocus),
                    _ => None,
                };
            }

            match self.app.input_mode {
                InputMode::Normal => Self::map_normal_key(key.bare_key),
                InputMode::Search(SearchFocus::Typing) => Self::map_typing_key(key.bare_key),
                InputMode::Search(SearchFocus::Navigating) => Self::map_results_key(key.bare_key),
            }
        }

        fn map_normal_key(key: BareKey) -> Option<Event> {
            Some(match key {
                BareKey::Down | BareKey::Char('j') => Event::MoveDown,
                BareKey::Up | BareKey::Char('k') => Event::MoveUp,
                BareKey::Left | BareKey::Char('h') => Event::MoveLeft,
                BareKey::Right | BareKey::Char('l') => Event::MoveRight,
                BareKey::Enter => Event::Select,
                BareKey::Esc => Event::Back,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('t') => Event::ToggleLayout,
                BareKey::Char('m') => Event::LoadMore,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            })
        }

        fn map_typing_key(key: BareKey) -> Option<Event> {
            Some(match key {
                BareKey::Down => Event::MoveDown,
                BareKey::Up => Event::MoveUp,
                BareKey::Left => Event::MoveLeft,
                BareKey::Right => Event::MoveRight,
                BareKey::Enter => Event::Select,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Tab => Event::FocusResults,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            })
        }

        fn map_results_key(key: BareKey) -> Option<Event> {
            Some(match key {
                BareKey::Down | BareKey::Char('j') => Event::MoveDown,
                BareKey::Up | BareKey::Char('k') => Event::MoveUp,
                BareKey::Left | BareKey::Char('h') => Event::MoveLeft,
                BareKey::Right | BareKey::Char('l') => Event::MoveRight,
                BareKey::Enter => Event::Select,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Char('/') | BareKey::Tab => Event::FocusSearchBar,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char('t') => Event::ToggleLayout,
                BareKey::Char('m') => Event::LoadMore,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            })
        }

        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
                Action::FetchCatalogPage { url, headers, context } => {
                    web_request(url, HttpVerb::Get, headers.clone(), vec![], context.to_map());
                }
                Action::FetchPoster { url, context } => {
                    web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context.to_map());
                }
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("cinegrid is a Zellij plugin; build it with `--target wasm32-wasip1` and load the .wasm from a layout");
}
