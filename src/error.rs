//! Error types for lattix-lift.

use thiserror::Error;

/// Error type for graph lifting operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter was outside its accepted range (e.g. a graph power of 0).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A simplex was built from an empty node set.
    #[error("A simplex must contain at least one node")]
    EmptySimplex,

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for graph lifting operations.
pub type Result<T> = std::result::Result<T, Error>;
