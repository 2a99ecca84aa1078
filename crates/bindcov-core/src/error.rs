//! Error types for bindcov-core.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A type string contained a character that cannot appear in a C++ type.
    #[error("invalid character {ch:?} in type '{text}'")]
    InvalidTypeChar { text: String, ch: char },

    /// A type string was empty after trimming.
    #[error("empty type")]
    EmptyType,
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
