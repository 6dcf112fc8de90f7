//! Error types for the domain layer
//!
//! The domain types enforce their invariants in exactly one place: the
//! [`Book`](crate::Book) constructor. Everything after construction is
//! unchecked, so this is the only error the core can produce.

use thiserror::Error;

/// Errors raised by the domain types
#[derive(Debug, Error)]
pub enum CoreError {
    /// A constructor argument failed validation
    #[error("invalid argument: {argument} - {reason}")]
    InvalidArgument { argument: String, reason: String },
}

impl CoreError {
    /// Helper to create an invalid-argument error
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
