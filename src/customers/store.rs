//! Customer record store contract.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::customers::{
    data::CustomerDraft,
    records::{CustomerId, CustomerRecord},
};

/// Name of the uniqueness constraint guarding customer emails.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "customers_email_key";

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures reported by a [`CustomerStore`].
///
/// Constraint violations are kept distinct from other failures so callers can tell a
/// rejected write apart from an unavailable store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    Unique { constraint: Option<String> },

    #[error("required column was null")]
    NotNull { column: Option<String> },

    #[error("customer {0} does not exist")]
    NotFound(CustomerId),

    #[error("storage failure")]
    Other(#[source] BoxError),
}

impl StoreError {
    pub fn other(error: impl Into<BoxError>) -> Self {
        Self::Other(error.into())
    }
}

#[automock]
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Look up a customer by identifier.
    async fn find(&self, id: CustomerId) -> Result<Option<CustomerRecord>, StoreError>;

    /// Insert `candidate` when it has no identifier, otherwise overwrite the names and email
    /// of the customer it names. Returns the stored record.
    async fn save(&self, candidate: CustomerDraft) -> Result<CustomerRecord, StoreError>;

    async fn exists(&self, id: CustomerId) -> Result<bool, StoreError>;

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), StoreError>;
}
