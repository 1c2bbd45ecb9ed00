//! Error types for the Cinegrid plugin.
//!
//! [`CinegridError`] is the single error type of the crate and [`Result`] the
//! matching alias. Catalog fetch failures never escape the event handler as
//! errors; they are recorded on the fetch coordinator and shown in the status
//! line. The variants here cover what the handler cannot absorb.

use thiserror::Error;

/// The main error type for Cinegrid operations.
#[derive(Debug, Error)]
pub enum CinegridError {
    /// The catalog API answered with a non-success status.
    ///
    /// `message` carries the API's own `status_message` when the error body
    /// could be decoded.
    #[error("HTTP {status}{}", message_suffix(.message))]
    Http {
        /// HTTP status code returned by the server.
        status: u16,
        /// Server-provided explanation, if any.
        message: Option<String>,
    },

    /// A response body could not be decoded as a catalog page.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A web response arrived with a context the plugin did not issue.
    #[error("Unroutable response: {0}")]
    Unroutable(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_ref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// A specialized `Result` type for Cinegrid operations.
pub type Result<T> = std::result::Result<T, CinegridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_includes_server_message() {
        let err = CinegridError::Http {
            status: 401,
            message: Some("Invalid API key".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 401: Invalid API key");
    }

    #[test]
    fn http_error_without_message() {
        let err = CinegridError::Http {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 503");
    }
}
