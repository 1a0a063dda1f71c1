//! Error types for building a CRUD handler.

use thiserror::Error;

/// Configuration errors reported by [`crate::Crud::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrudError {
    /// The row listing callback is mandatory.
    #[error("FuncRows function is required")]
    FuncRowsRequired,

    /// At least one update field must be configured.
    #[error("UpdateFields is required")]
    UpdateFieldsRequired,

    /// A fetch callback for the edit page needs an update callback to save.
    #[error("FuncUpdate function is required")]
    FuncUpdateRequired,
}

/// Result type alias for CRUD construction.
pub type Result<T> = std::result::Result<T, CrudError>;

/// Error type returned by caller-supplied callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
