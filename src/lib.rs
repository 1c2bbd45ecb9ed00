//! Cinegrid: a Zellij plugin for browsing a paginated movie catalog.
//!
//! Cinegrid shows the "popular movies" listing of a TMDB-style API as a poster
//! grid or a compact list. It can:
//! - Load more pages on demand, twenty movies at a time
//! - Filter the loaded movies by title once three characters are typed
//! - Open a detail screen over a theme gradient with rating and overview

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, web_request
//! └─────────────────────────────────────────────────────┘
//!                        │ Event / Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - handle_event state machine                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI (ui/)      │   │ Catalog       │   │ API (api/)    │
//! │ - Components  │   │ (catalog/)    │   │ - URLs        │
//! │ - Theming     │   │ - Store       │   │ - Context     │
//! │ - Gradient    │   │ - Filter      │   │ - Decoding    │
//! │               │   │ - Fetch state │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), posters (posters/),              │
//! │  sandbox paths (infrastructure/)                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← OTLP JSON file
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/cinegrid.wasm" {
//!         api_token "eyJhbGciOi..."
//!         layout "grid"
//!         append_mode "page"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Flow
//!
//! 1. `load` parses [`Config`], installs tracing, calls [`initialize`] and asks
//!    for the `WebAccess` permission.
//! 2. Once granted, page 1 is requested (unless `autoload` is off).
//! 3. Each `web_request` completion comes back as [`Event::WebResponse`]; its
//!    context says whether it is a catalog page or a poster.
//! 4. `render` requests posters for the visible cards and draws the view model.
//!
//! # Example
//!
//! ```rust
//! use cinegrid::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::LoadMore)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchCatalogPage { .. }]));
//!
//! // A second tap while page 1 is in flight is ignored.
//! let (_, actions) = handle_event(&mut state, &Event::LoadMore)?;
//! assert!(actions.is_empty());
//! # Ok::<(), cinegrid::CinegridError>(())
//! ```

pub mod api;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod posters;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, LayoutMode, Screen, SearchFocus};
pub use domain::{CatalogPage, CinegridError, MovieItem, Result};
pub use ui::Theme;

use api::ApiSettings;
use catalog::{AppendPolicy, FetchCoordinator};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Plugin configuration parsed from the KDL plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/cinegrid.wasm" {
///     api_url "https://api.themoviedb.org/3/movie/popular"
///     api_key "0123abcd"
///     image_size "w342"
///     layout "list"
///     append_mode "single"
///     theme_file "~/.config/cinegrid/theme.toml"
///     autoload "false"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Endpoint, credentials and poster URL pieces.
    pub api: ApiSettings,

    /// Starting layout. Default: grid.
    pub layout: LayoutMode,

    /// How page responses are folded into the store. Default: whole page.
    pub append_mode: AppendPolicy,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// TOML theme file; `~` resolves to the sandbox host mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Fetch page 1 as soon as web access is granted.
    pub autoload: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            layout: LayoutMode::default(),
            append_mode: AppendPolicy::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            autoload: true,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Unknown keys are ignored. Empty strings count as unset, and values that
    /// fail to parse keep their default (logged at debug).
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use cinegrid::{Config, LayoutMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("layout".to_string(), "list".to_string());
    /// map.insert("api_key".to_string(), "k3y".to_string());
    /// map.insert("autoload".to_string(), "nope".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.layout, LayoutMode::List);
    /// assert_eq!(config.api.api_key.as_deref(), Some("k3y"));
    /// assert!(config.autoload);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let api = ApiSettings {
            api_url: text("api_url").unwrap_or(defaults.api.api_url),
            api_key: text("api_key"),
            api_token: text("api_token"),
            image_base_url: text("image_base_url").unwrap_or(defaults.api.image_base_url),
            image_size: text("image_size").unwrap_or(defaults.api.image_size),
        };

        let autoload = match text("autoload") {
            None => defaults.autoload,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::debug!(value = %raw, "invalid autoload value, using default");
                defaults.autoload
            }),
        };

        Self {
            api,
            layout: parse_or(config, "layout", defaults.layout),
            append_mode: parse_or(config, "append_mode", defaults.append_mode),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            autoload,
        }
    }
}

fn parse_or<T>(config: &BTreeMap<String, String>, key: &str, default: T) -> T
where
    T: FromStr<Err = CinegridError>,
{
    match config.get(key).map(|v| v.parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            tracing::debug!(key, error = %e, "invalid config value, using default");
            default
        }
        None => default,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Builds the initial [`AppState`] for a configuration.
///
/// The theme comes from `theme_file`, then `theme`, then the default; a theme
/// that fails to load is logged and replaced by the default. The store starts
/// empty on page 1.
///
/// ```rust
/// use cinegrid::{initialize, Config, LayoutMode};
///
/// let state = initialize(&Config { layout: LayoutMode::List, ..Config::default() });
/// assert_eq!(state.layout, LayoutMode::List);
/// assert!(state.store.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        layout = ?config.layout,
        append_mode = ?config.append_mode,
        "initializing cinegrid plugin"
    );

    let mut state = AppState::new(load_theme(config), config.api.clone());
    state.layout = config.layout;
    state.coordinator = FetchCoordinator::new(config.append_mode);
    state.autoload = config.autoload;
    state
}

fn load_theme(config: &Config) -> Theme {
    if let Some(file) = &config.theme_file {
        return Theme::from_file(infrastructure::expand_tilde(file)).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_deref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            let available: Vec<&str> = Theme::builtin_names().collect();
            tracing::debug!(theme_name = %name, ?available, "unknown theme, using default");
            Theme::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("api_url", "https://example.test/movies"),
            ("api_key", "k"),
            ("api_token", "t"),
            ("image_base_url", "https://img.example.test"),
            ("image_size", "w185"),
            ("layout", "LIST"),
            ("append_mode", "single"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
            ("autoload", "off"),
        ]));

        assert_eq!(config.api.api_url, "https://example.test/movies");
        assert_eq!(config.api.api_key.as_deref(), Some("k"));
        assert_eq!(config.api.api_token.as_deref(), Some("t"));
        assert_eq!(config.api.image_base_url, "https://img.example.test");
        assert_eq!(config.api.image_size, "w185");
        assert_eq!(config.layout, LayoutMode::List);
        assert_eq!(config.append_mode, AppendPolicy::OnePerCompletion);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(!config.autoload);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("layout", "carousel"),
            ("append_mode", "sometimes"),
            ("api_url", "   "),
        ]));
        assert_eq!(config.layout, LayoutMode::Grid);
        assert_eq!(config.append_mode, AppendPolicy::WholePage);
        assert_eq!(config.api.api_url, api::request::DEFAULT_API_URL);
    }

    #[test]
    fn initialize_applies_policy_and_autoload() {
        let state = initialize(&Config {
            append_mode: AppendPolicy::OnePerCompletion,
            autoload: false,
            ..Config::default()
        });
        assert_eq!(state.coordinator.policy(), AppendPolicy::OnePerCompletion);
        assert!(!state.autoload);
        assert_eq!(state.store.current_page(), 1);
    }

    #[test]
    fn unknown_theme_uses_default() {
        let state = initialize(&Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        });
        assert_eq!(state.theme.name, Theme::default().name);
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let builtin = toml::to_string(&Theme::from_name("catppuccin-latte").unwrap()).unwrap();
        let custom = builtin.replacen("catppuccin-latte", "custom-latte", 1);
        file.write_all(custom.as_bytes()).unwrap();

        let state = initialize(&Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        });
        assert_eq!(state.theme.name, "custom-latte");
    }
}
