//! Error type definitions for pairing and group operations

use thiserror::Error;

/// Primary error type for pairing and group operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operation that is not defined for this structure
    #[error("{operation} is not supported: {reason}")]
    Unsupported {
        operation: &'static str,
        reason: &'static str,
    },

    /// Argument from the wrong group or field, or otherwise malformed
    #[error("{context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// Inversion of zero
    #[error("Division by zero: {context}")]
    DivisionByZero {
        context: &'static str,
    },

    /// A bounded search ran out of candidates
    #[error("{context}: no result after {attempts} attempts")]
    Exhausted {
        context: &'static str,
        attempts: usize,
    },

    /// Malformed representation
    #[error("Serialization error: {context}: {message}")]
    Serialization {
        context: &'static str,
        message: String,
    },
}

/// Result type for pairing and group operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidArgument` error
    pub fn invalid(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `Serialization` error
    pub fn serialization(context: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Unsupported { reason, .. } => Self::Unsupported {
                operation: context,
                reason,
            },
            Self::InvalidArgument { message, .. } => Self::InvalidArgument { context, message },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::Exhausted { attempts, .. } => Self::Exhausted { context, attempts },
            Self::Serialization { message, .. } => Self::Serialization { context, message },
        }
    }

    /// Replace the message of an existing error, where the variant carries one
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidArgument { context, .. } => Self::InvalidArgument { context, message },
            Self::Serialization { context, .. } => Self::Serialization { context, message },
            other => other,
        }
    }
}
