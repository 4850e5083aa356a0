//! Customers service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, instrument};

use crate::customers::{
    data::CustomerDraft,
    errors::CustomersServiceError,
    records::{CustomerId, CustomerRecord},
    store::{CustomerStore, StoreError},
    validation::{self, UNKNOWN_CUSTOMER_ID, ValidationErrors},
};

/// Customer service over any [`CustomerStore`].
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn CustomerStore>,
}

impl RecordService {
    #[must_use]
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }
}

impl Debug for RecordService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RecordService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CustomersService for RecordService {
    #[instrument(
        name = "customers.upsert",
        skip_all,
        fields(customer_id = ?draft.existing_id()),
        err
    )]
    async fn upsert(&self, draft: CustomerDraft) -> Result<CustomerRecord, CustomersServiceError> {
        validation::validate(&draft)?;

        if let Some(id) = draft.existing_id()
            && !self.store.exists(id).await?
        {
            return Err(ValidationErrors::single("id", UNKNOWN_CUSTOMER_ID).into());
        }

        let saved = self.store.save(draft).await.map_err(|error| {
            match &error {
                StoreError::Unique { constraint } => {
                    debug!(?constraint, "customer write rejected by unique constraint");
                }
                StoreError::NotNull { column } => {
                    debug!(?column, "customer write rejected by not-null constraint");
                }
                StoreError::NotFound(_) | StoreError::Other(_) => {}
            }

            CustomersServiceError::from(error)
        })?;

        self.store
            .find(saved.id)
            .await?
            .ok_or(CustomersServiceError::MissingAfterWrite(saved.id))
    }

    #[instrument(name = "customers.get_by_id", skip(self), err)]
    async fn get_by_id(
        &self,
        id: CustomerId,
    ) -> Result<Option<CustomerRecord>, CustomersServiceError> {
        Ok(self.store.find(id).await?)
    }

    #[instrument(name = "customers.delete", skip(self), err)]
    async fn delete(&self, id: CustomerId) -> Result<bool, CustomersServiceError> {
        if !self.store.exists(id).await? {
            return Ok(false);
        }

        self.store.delete_by_id(id).await?;

        Ok(true)
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Validates `draft`, then creates it (no id, or id zero) or updates the customer it
    /// names, returning the record as re-read from the store.
    async fn upsert(&self, draft: CustomerDraft) -> Result<CustomerRecord, CustomersServiceError>;

    /// Retrieve a single customer, if it exists.
    async fn get_by_id(
        &self,
        id: CustomerId,
    ) -> Result<Option<CustomerRecord>, CustomersServiceError>;

    /// Deletes a customer. Returns `false` when there was nothing to delete.
    async fn delete(&self, id: CustomerId) -> Result<bool, CustomersServiceError>;
}
