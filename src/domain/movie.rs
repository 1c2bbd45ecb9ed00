//! Movie catalog domain model.
//!
//! [`MovieItem`] and [`CatalogPage`] mirror the JSON shape of a TMDB-style
//! paginated listing (`page`, `results`, `total_pages`, `total_results`).
//! Items are immutable once received.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// A single movie as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieItem {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
    /// Path fragment appended to the image base URL, e.g. `/abc.jpg`.
    ///
    /// Empty when the API reports no poster.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub poster_path: String,
    #[serde(default)]
    pub popularity: f64,
    /// Average rating on a 0-10 scale.
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// One page of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// 1-based page number echoed by the server.
    #[serde(rename = "page")]
    pub page_number: u32,
    #[serde(rename = "results")]
    pub items: Vec<MovieItem>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

impl MovieItem {
    /// Popularity rounded to the nearest integer, right-aligned in two columns.
    ///
    /// ```
    /// # use cinegrid::MovieItem;
    /// # let mut movie = MovieItem::new(1, "Heat");
    /// movie.popularity = 83.7;
    /// assert_eq!(movie.popularity_label(), "84");
    /// movie.popularity = 4.2;
    /// assert_eq!(movie.popularity_label(), " 4");
    /// ```
    #[must_use]
    pub fn popularity_label(&self) -> String {
        format!("{:>2}", round_to_int(self.popularity))
    }

    /// Vote average rounded to the nearest integer, as `N/10`.
    #[must_use]
    pub fn vote_label(&self) -> String {
        format!("{}/10", round_to_int(self.vote_average))
    }

    /// Year component of `release_date`, if it parses as `YYYY-MM-DD`.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    /// Creates a movie with only an id and title set.
    ///
    /// Numeric fields are zero and text fields empty. Mostly useful for tests
    /// and fixtures.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            poster_path: String::new(),
            popularity: 0.0,
            vote_average: 0.0,
            vote_count: 0,
            release_date: None,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_int(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
