//! Catalog and poster request construction.
//!
//! [`ApiSettings`] turns plugin configuration into concrete URLs and headers.
//! The plugin shim hands them to Zellij's `web_request`.

use std::collections::BTreeMap;

/// Default catalog endpoint (TMDB popular movies).
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3/movie/popular";

/// Default host and path prefix for poster images.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Default poster size token.
pub const DEFAULT_IMAGE_SIZE: &str = "w92";

/// Endpoint and credential settings for the catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Listing endpoint; the page number is appended as a query parameter.
    pub api_url: String,
    /// Sent as the `api_key` query parameter when set.
    pub api_key: Option<String>,
    /// Sent as an `Authorization: Bearer` header when set.
    pub api_token: Option<String>,
    pub image_base_url: String,
    pub image_size: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            api_token: None,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
        }
    }
}

impl ApiSettings {
    /// URL of the given catalog page.
    ///
    /// ```
    /// use cinegrid::api::ApiSettings;
    ///
    /// let settings = ApiSettings {
    ///     api_key: Some("k3y".to_string()),
    ///     ..ApiSettings::default()
    /// };
    /// assert_eq!(
    ///     settings.page_url(3),
    ///     "https://api.themoviedb.org/3/movie/popular?page=3&api_key=k3y"
    /// );
    /// ```
    #[must_use]
    pub fn page_url(&self, page: u32) -> String {
        let separator = if self.api_url.contains('?') { '&' } else { '?' };
        let mut url = format!("{}{separator}page={page}", self.api_url);
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            url.push_str("&api_key=");
            url.push_str(key);
        }
        url
    }

    /// Headers sent with every catalog request.
    #[must_use]
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(token) = self.api_token.as_deref().filter(|t| !t.is_empty()) {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }
        headers
    }

    /// Poster URL for a movie's `poster_path`, or `None` when it has none.
    ///
    /// The base URL, size token and path are joined with exactly one slash
    /// between each segment.
    #[must_use]
    pub fn poster_url(&self, poster_path: &str) -> Option<String> {
        let path = poster_path.trim().trim_start_matches('/');
        if path.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{}/{path}",
            self.image_base_url.trim_end_matches('/'),
            self.image_size.trim_matches('/'),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_without_key() {
        let settings = ApiSettings::default();
        assert_eq!(
            settings.page_url(1),
            "https://api.themoviedb.org/3/movie/popular?page=1"
        );
    }

    #[test]
    fn page_url_respects_existing_query() {
        let settings = ApiSettings {
            api_url: "https://example.test/movies?language=en-US".to_string(),
            ..ApiSettings::default()
        };
        assert_eq!(
            settings.page_url(2),
            "https://example.test/movies?language=en-US&page=2"
        );
    }

    #[test]
    fn bearer_token_becomes_header() {
        let settings = ApiSettings {
            api_token: Some("abc".to_string()),
            ..ApiSettings::default()
        };
        let headers = settings.headers();
        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer abc"));
        assert!(!ApiSettings::default().headers().contains_key("Authorization"));
    }

    #[test]
    fn poster_url_joins_segments() {
        let settings = ApiSettings::default();
        assert_eq!(
            settings.poster_url("/kqjL17yufvn9OVLyXYpvtyrFfak.jpg").as_deref(),
            Some("https://image.tmdb.org/t/p/w92/kqjL17yufvn9OVLyXYpvtyrFfak.jpg")
        );
        assert_eq!(settings.poster_url(""), None);
        assert_eq!(settings.poster_url("  "), None);
    }
}
