//! Error types for the built-in selectors.
//!
//! The core operations define no errors of their own: whatever a caller's
//! closure returns is passed back untouched.

use thiserror::Error;

/// Errors raised by the ready-made selectors in [`crate::selectors`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A character was requested from an empty string.
    #[error("cannot take the first character of an empty string")]
    EmptyString,
}

/// Result type for selector operations.
pub type Result<T> = std::result::Result<T, SelectorError>;
