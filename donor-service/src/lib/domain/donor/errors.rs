use thiserror::Error;

use crate::domain::donor::models::DonorId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Invalid blood group: {0}")]
    InvalidBloodGroup(String),
}

/// Top-level error for donor record operations
#[derive(Debug, Clone, Error)]
pub enum DonorError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Donor record not found: {0}")]
    NotFound(DonorId),

    #[error("Storage failure: {0}")]
    StorageFailure(String),
}
