//! Error handling module
//!
//! Wraps underlying failures with the status code they map to

pub mod types;

pub use types::*;
