//! Error types for forms.

use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field was posted empty or not at all.
    #[error("{label} is required field")]
    MissingField { label: String },
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
