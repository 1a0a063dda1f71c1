//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No route matched the request.
    #[error("no route matched: {method} {path}")]
    NotFound { method: String, path: String },

    /// Method not allowed for this route.
    #[error("method not allowed: {method} for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// The path pattern is not an absolute literal path.
    #[error("invalid path pattern `{pattern}`: expected an absolute path")]
    InvalidPattern { pattern: String },
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
