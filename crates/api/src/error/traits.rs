//! Error handling traits

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T, E>: Sized {
    /// Add context to an error when converting to Error
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;

    /// Add message to an error when converting to Error
    fn with_message(self, message: impl Into<String>) -> Result<T>
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_message(self, message: impl Into<String>) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_message(message))
    }
}

/// Convert an optional search result into an `Exhausted` error
pub trait OptionExt<T>: Sized {
    /// Fail with `Error::Exhausted` when the search produced nothing
    fn or_exhausted(self, context: &'static str, attempts: usize) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_exhausted(self, context: &'static str, attempts: usize) -> Result<T> {
        self.ok_or(Error::Exhausted { context, attempts })
    }
}
