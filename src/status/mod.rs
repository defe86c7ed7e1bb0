//! Status code module
//!
//! Fixed status codes, their labels and table rendering

pub mod code;
pub mod table;

pub use code::*;
pub use table::*;
