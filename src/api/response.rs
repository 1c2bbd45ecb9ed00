//! Catalog response decoding.

use crate::domain::{CatalogPage, CinegridError, Result};
use serde::Deserialize;

/// Error body shape used by TMDB (`{"status_code": 7, "status_message": "..."}`).
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    status_message: Option<String>,
}

/// Returns `true` for 2xx statuses.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Decodes a catalog listing response.
///
/// # Errors
///
/// - [`CinegridError::Http`] for non-2xx statuses, with the server's
///   `status_message` when the body carries one
/// - [`CinegridError::Decode`] when a successful body is not a catalog page
pub fn decode_catalog(status: u16, body: &[u8]) -> Result<CatalogPage> {
    if !is_success(status) {
        let message = serde_json::from_slice::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.status_message);
        return Err(CinegridError::Http { status, message });
    }

    let page: CatalogPage = serde_json::from_slice(body)?;
    tracing::debug!(
        page = page.page_number,
        items = page.items.len(),
        total_pages = ?page.total_pages,
        "catalog page decoded"
    );
    Ok(page)
}
