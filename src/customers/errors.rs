//! Customers service errors.

use thiserror::Error;

use crate::customers::{records::CustomerId, store::StoreError, validation::ValidationErrors};

#[derive(Debug, Error)]
pub enum CustomersServiceError {
    #[error("invalid customer: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("email address is already in use")]
    DuplicateEmail,

    #[error("missing required data")]
    RequiredField,

    #[error("customer not found")]
    NotFound,

    #[error("customer {0} could not be read back after writing")]
    MissingAfterWrite(CustomerId),

    #[error("storage error")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for CustomersServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Unique { .. } => Self::DuplicateEmail,
            StoreError::NotNull { .. } => Self::RequiredField,
            StoreError::NotFound(_) => Self::NotFound,
            StoreError::Other(_) => Self::Storage(error),
        }
    }
}
