//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents: built-in Catppuccin variants compiled into the
//! plugin, or a user file named by the `theme_file` configuration key.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! accent = "#cba6f7"
//! error_fg = "#f38ba8"
//! poster_fill = "#585b70"
//! poster_placeholder = "#45475a"
//! background = "#1e1e2e"
//!
//! [gradient]
//! start = "#ff0000"
//! end = "#0000ff"
//! opacity = 0.6
//! ```
//!
//! The `[gradient]` table is optional and defaults to red fading into blue at
//! 60% opacity over `background`.
//!
//! # Example
//!
//! ```rust
//! use cinegrid::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! print!("{}", Theme::fg(&theme.colors.header_fg));
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::{CinegridError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
    /// Detail screen background gradient.
    #[serde(default)]
    pub gradient: Gradient,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    pub text_normal: String,
    /// Dimmed text color (footer, secondary info, loading frames).
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Layout toggle icon and the enabled "Load More" button.
    pub accent: String,
    /// Fetch error messages.
    pub error_fg: String,

    /// Block color of a loaded poster.
    pub poster_fill: String,
    /// Neutral block color of a poster that failed to load.
    pub poster_placeholder: String,

    /// Color gradients are blended over.
    pub background: String,
}

/// Two-stop vertical gradient drawn behind the detail screen.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Gradient {
    pub start: String,
    pub end: String,
    /// Opacity of the gradient over the theme background, `0.0..=1.0`.
    pub opacity: f32,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            start: "#ff0000".to_string(),
            end: "#0000ff".to_string(),
            opacity: 0.6,
        }
    }
}

/// Built-in themes, compiled into the plugin.
const BUILTIN: &[(&str, &str)] = &[
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
    ("catppuccin-frappe", include_str!("../../themes/catppuccin-frappe.toml")),
    ("catppuccin-macchiato", include_str!("../../themes/catppuccin-macchiato.toml")),
];

const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Unparseable colors render as white.
const FALLBACK_RGB: Rgb = Rgb(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    /// Parses `#rrggbb` (the `#` is optional).
    fn parse(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        let [_, r, g, b] = value.to_be_bytes();
        Some(Self(r, g, b))
    }

    fn parse_or_white(hex: &str) -> Self {
        Self::parse(hex).unwrap_or(FALLBACK_RGB)
    }

    /// `self` laid over `under` with `alpha` in `0.0..=1.0`.
    fn over(self, under: Self, alpha: f32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mix = |top: u8, bottom: u8| -> u8 {
            let value = f32::from(top).mul_add(alpha, f32::from(bottom) * (1.0 - alpha));
            value.round().clamp(0.0, 255.0) as u8
        };
        Self(mix(self.0, under.0), mix(self.1, under.1), mix(self.2, under.2))
    }

    /// SGR truecolor sequence; `layer` is 38 (foreground) or 48 (background).
    fn sgr(self, layer: u8) -> String {
        format!("\u{1b}[{layer};2;{};{};{}m", self.0, self.1, self.2)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Theme {
    /// Loads a built-in theme by name, see [`Theme::builtin_names`].
    ///
    /// ```rust
    /// use cinegrid::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .and_then(|(_, source)| toml::from_str(source).ok())
    }

    /// Names accepted by [`Theme::from_name`].
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|(name, _)| *name)
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CinegridError::Theme`] when the file cannot be read or is not
    /// a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CinegridError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| CinegridError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Mixes `over` onto `under` at the given opacity.
    ///
    /// ```rust
    /// use cinegrid::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::blend("#ff0000", "#000000", 0.5), "#800000");
    /// assert_eq!(Theme::blend("#ff0000", "#00ff00", 0.0), "#00ff00");
    /// ```
    #[must_use]
    pub fn blend(over: &str, under: &str, opacity: f32) -> String {
        Rgb::parse_or_white(over)
            .over(Rgb::parse_or_white(under), opacity.clamp(0.0, 1.0))
            .to_string()
    }

    /// Color of the detail gradient at `position` (`0.0` top, `1.0` bottom),
    /// already blended over the theme background.
    #[must_use]
    pub fn gradient_at(&self, position: f32) -> String {
        let t = position.clamp(0.0, 1.0);
        let stop = Self::blend(&self.gradient.end, &self.gradient.start, t);
        Self::blend(&stop, &self.colors.background, self.gradient.opacity)
    }

    /// 24-bit foreground escape for a hex color.
    ///
    /// ```rust
    /// use cinegrid::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Rgb::parse_or_white(hex).sgr(38)
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Rgb::parse_or_white(hex).sgr(48)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Clears every attribute and color.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// ```rust
    /// use cinegrid::ui::Theme;
    ///
    /// assert_eq!(Theme::default().name, "catppuccin-mocha");
    /// ```
    fn default() -> Self {
        // Built-in sources are checked by the test suite.
        Self::from_name(DEFAULT_THEME).expect("built-in default theme parses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        assert_eq!(Theme::builtin_names().count(), 4);
        for name in Theme::builtin_names() {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn gradient_defaults_to_red_blue_at_sixty_percent() {
        let gradient = Gradient::default();
        assert_eq!(gradient.start, "#ff0000");
        assert_eq!(gradient.end, "#0000ff");
        assert!((gradient.opacity - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn gradient_endpoints_blend_over_background() {
        let mut theme = Theme::default();
        theme.colors.background = "#000000".to_string();
        theme.gradient = Gradient {
            start: "#ff0000".to_string(),
            end: "#0000ff".to_string(),
            opacity: 1.0,
        };
        assert_eq!(theme.gradient_at(0.0), "#ff0000");
        assert_eq!(theme.gradient_at(1.0), "#0000ff");

        theme.gradient.opacity = 0.6;
        assert_eq!(theme.gradient_at(0.0), "#990000");
    }

    #[test]
    fn rgb_round_trips_through_hex() {
        assert_eq!(Rgb::parse("#1e1e2e"), Some(Rgb(0x1e, 0x1e, 0x2e)));
        assert_eq!(Rgb(0x1e, 0x1e, 0x2e).to_string(), "#1e1e2e");
        assert_eq!(Rgb::parse("#fff"), None);
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#ééé"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn loads_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let builtin = include_str!("../../themes/catppuccin-frappe.toml")
            .replace("catppuccin-frappe", "my-frappe");
        file.write_all(builtin.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "my-frappe");
    }

    #[test]
    fn missing_or_malformed_file_is_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CinegridError::Theme(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n[colors]\nheader_fg = 3\n").unwrap();
        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CinegridError::Theme(_)));
    }
}
