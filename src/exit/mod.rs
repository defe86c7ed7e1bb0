//! Process termination module
//!
//! Resolves exit codes from error chains and ends the process

pub mod terminate;

pub use terminate::*;
