//! Error handling for the filter
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the filter
pub type Result<T> = std::result::Result<T, FilterError>;

/// Main error type for the filter
#[derive(Error, Debug)]
pub enum FilterError {
    /// Configuration errors: empty word lists, empty substitution table,
    /// unreadable configuration sources, or a pattern that fails to compile
    #[error("Configuration error: {0}")]
    Config(String),

    /// An empty or blank string was passed to `check`
    #[error("No string to check")]
    EmptyInput,

    /// Cache collaborator errors. The caching layer downgrades these to
    /// misses; they are only surfaced by direct store operations.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Runtime pattern execution errors (e.g. a backtracking limit hit
    /// while scanning pathological input)
    #[error("Pattern execution error: {0}")]
    Pattern(String),
}
