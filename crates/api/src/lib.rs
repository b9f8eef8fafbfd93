//! Public API traits and error types for the bnpair library
//!
//! This crate provides the public API surface for the bnpair ecosystem: the
//! error type shared by every crate and the `Group` contract implemented by
//! the source and target groups of a pairing.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt, OptionExt};
pub use traits::Group;
