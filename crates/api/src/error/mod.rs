//! Error handling for the pairing ecosystem

pub mod types;
pub mod traits;
pub mod validate;

#[cfg(test)]
mod tests;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::{OptionExt, ResultExt};

impl From<num_bigint::ParseBigIntError> for Error {
    fn from(e: num_bigint::ParseBigIntError) -> Self {
        Self::Serialization {
            context: "integer parsing",
            message: e.to_string(),
        }
    }
}
