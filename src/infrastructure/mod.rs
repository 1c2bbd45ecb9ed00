//! Sandbox filesystem conventions.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
