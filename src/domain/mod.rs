//! Domain layer for the Cinegrid plugin.
//!
//! Holds the catalog data model and the crate error type, independent of
//! Zellij APIs and rendering.
//!
//! - [`error`]: Error type and result alias
//! - [`movie`]: Movie item and catalog page model

pub mod error;
pub mod movie;

pub use error::{CinegridError, Result};
pub use movie::{CatalogPage, MovieItem};
