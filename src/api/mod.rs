//! Catalog API plumbing.
//!
//! The plugin never performs I/O itself. It describes requests as
//! [`Action`](crate::app::Action)s; the Zellij host executes them and delivers
//! the result as a `WebRequestResult` event carrying the same
//! [`RequestContext`].
//!
//! - [`request`]: URL and header construction from configuration
//! - [`context`]: request context encoding for completion routing
//! - [`response`]: status handling and JSON decoding

pub mod context;
pub mod request;
pub mod response;

pub use context::RequestContext;
pub use request::ApiSettings;
pub use response::{decode_catalog, is_success};
