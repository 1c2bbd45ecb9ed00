//! Request context carried through Zellij's `web_request`.
//!
//! Zellij returns the context map untouched with the `WebRequestResult`
//! event, so the context is what routes a completion back to the request that
//! caused it. No callback or delegate is stored on the plugin side.

use crate::domain::{CinegridError, Result};
use std::collections::BTreeMap;

const KIND_KEY: &str = "kind";
const PAGE_KEY: &str = "page";
const URL_KEY: &str = "url";

/// Identifies what a web request was for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContext {
    /// A catalog listing request for a page.
    CatalogPage { page: u32 },
    /// A poster image request.
    Poster { url: String },
}

impl RequestContext {
    /// Encodes the context as the string map Zellij round-trips.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        match self {
            Self::CatalogPage { page } => {
                map.insert(KIND_KEY.to_string(), "catalog".to_string());
                map.insert(PAGE_KEY.to_string(), page.to_string());
            }
            Self::Poster { url } => {
                map.insert(KIND_KEY.to_string(), "poster".to_string());
                map.insert(URL_KEY.to_string(), url.clone());
            }
        }
        map
    }

    /// Decodes a context map returned with a web response.
    ///
    /// # Errors
    ///
    /// Returns [`CinegridError::Unroutable`] when the map lacks a known kind or
    /// the fields that kind requires.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        match map.get(KIND_KEY).map(String::as_str) {
            Some("catalog") => map
                .get(PAGE_KEY)
                .and_then(|p| p.parse::<u32>().ok())
                .map(|page| Self::CatalogPage { page })
                .ok_or_else(|| CinegridError::Unroutable("catalog response without page".to_string())),
            Some("poster") => map
                .get(URL_KEY)
                .map(|url| Self::Poster { url: url.clone() })
                .ok_or_else(|| CinegridError::Unroutable("poster response without url".to_string())),
            other => Err(CinegridError::Unroutable(format!("unknown request kind {other:?}"))),
        }
    }
}
