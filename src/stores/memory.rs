//! In-process customer store.
//!
//! Keeps records in a `BTreeMap` behind a single async mutex. Constraint checks and the write
//! happen under the same lock, so concurrent saves observe each other the way a database
//! unique index would.

use std::collections::BTreeMap;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use tokio::sync::Mutex;

use crate::customers::{
    data::CustomerDraft,
    records::{CustomerId, CustomerRecord},
    store::{CustomerStore, EMAIL_UNIQUE_CONSTRAINT, StoreError},
};

#[derive(Debug, Default)]
pub struct MemoryCustomerStore {
    inner: Mutex<Customers>,
}

#[derive(Debug, Default)]
struct Customers {
    records: BTreeMap<CustomerId, CustomerRecord>,
    last_id: i64,
}

impl MemoryCustomerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored customers.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.records.is_empty()
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn find(&self, id: CustomerId) -> Result<Option<CustomerRecord>, StoreError> {
        Ok(self.inner.lock().await.records.get(&id).cloned())
    }

    async fn save(&self, candidate: CustomerDraft) -> Result<CustomerRecord, StoreError> {
        let mut customers = self.inner.lock().await;

        for (column, value) in [
            ("first_name", &candidate.first_name),
            ("last_name", &candidate.last_name),
            ("email", &candidate.email),
        ] {
            if value.is_empty() {
                return Err(StoreError::NotNull {
                    column: Some(column.to_string()),
                });
            }
        }

        let target = candidate.existing_id();

        if customers
            .records
            .values()
            .any(|record| record.email == candidate.email && Some(record.id) != target)
        {
            return Err(StoreError::Unique {
                constraint: Some(EMAIL_UNIQUE_CONSTRAINT.to_string()),
            });
        }

        let now = Timestamp::now();

        if let Some(id) = target {
            let record = customers
                .records
                .get_mut(&id)
                .ok_or(StoreError::NotFound(id))?;

            record.modified_at = advance(record.modified_at, now)?;
            record.first_name = candidate.first_name;
            record.last_name = candidate.last_name;
            record.email = candidate.email;

            return Ok(record.clone());
        }

        customers.last_id += 1;
        let id = CustomerId::new(customers.last_id);

        let record = CustomerRecord {
            id,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            email: candidate.email,
            created_at: now,
            modified_at: now,
        };

        customers.records.insert(id, record.clone());

        Ok(record)
    }

    async fn exists(&self, id: CustomerId) -> Result<bool, StoreError> {
        Ok(self.inner.lock().await.records.contains_key(&id))
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), StoreError> {
        self.inner.lock().await.records.remove(&id);

        Ok(())
    }
}

/// Modification time for an update: `now`, or one nanosecond past `previous` when the clock
/// has not moved on.
fn advance(previous: Timestamp, now: Timestamp) -> Result<Timestamp, StoreError> {
    if now > previous {
        return Ok(now);
    }

    previous
        .checked_add(SignedDuration::from_nanos(1))
        .map_err(StoreError::other)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn draft(email: &str) -> CustomerDraft {
        CustomerDraft::new("Man", "Turtle", email)
    }

    #[tokio::test]
    async fn ids_start_at_one_and_increase() -> TestResult {
        let store = MemoryCustomerStore::new();

        let first = store.save(draft("a@turtle.sea")).await?;
        let second = store.save(draft("b@turtle.sea")).await?;

        assert_eq!(first.id, CustomerId::new(1));
        assert_eq!(second.id, CustomerId::new(2));
        assert_eq!(store.len().await, 2);

        Ok(())
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() -> TestResult {
        let store = MemoryCustomerStore::new();

        let first = store.save(draft("a@turtle.sea")).await?;
        store.delete_by_id(first.id).await?;
        let second = store.save(draft("a@turtle.sea")).await?;

        assert_eq!(second.id, CustomerId::new(2));

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_unique_violation() -> TestResult {
        let store = MemoryCustomerStore::new();
        store.save(draft("a@turtle.sea")).await?;

        let result = store.save(draft("a@turtle.sea")).await;

        assert!(
            matches!(
                &result,
                Err(StoreError::Unique { constraint: Some(name) })
                    if name == EMAIL_UNIQUE_CONSTRAINT
            ),
            "expected Unique, got {result:?}"
        );
        assert_eq!(store.len().await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_may_keep_its_own_email() -> TestResult {
        let store = MemoryCustomerStore::new();
        let created = store.save(draft("a@turtle.sea")).await?;

        let updated = store
            .save(CustomerDraft::new("Woman", "Turtle", "a@turtle.sea").with_id(created.id))
            .await?;

        assert_eq!(updated.first_name, "Woman");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.modified_at > created.modified_at);

        Ok(())
    }

    #[tokio::test]
    async fn empty_value_is_not_null_violation() {
        let store = MemoryCustomerStore::new();

        let result = store.save(CustomerDraft::new("Man", "", "a@turtle.sea")).await;

        assert!(
            matches!(
                &result,
                Err(StoreError::NotNull { column: Some(column) })
                    if column == "last_name"
            ),
            "expected NotNull, got {result:?}"
        );
    }

    #[tokio::test]
    async fn updating_missing_customer_is_not_found() {
        let store = MemoryCustomerStore::new();

        let result = store
            .save(draft("a@turtle.sea").with_id(CustomerId::new(5)))
            .await;

        assert!(
            matches!(result, Err(StoreError::NotFound(id)) if id == CustomerId::new(5)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn deleting_missing_customer_is_a_no_op() -> TestResult {
        let store = MemoryCustomerStore::new();
        store.save(draft("a@turtle.sea")).await?;

        store.delete_by_id(CustomerId::new(9)).await?;

        assert_eq!(store.len().await, 1);

        Ok(())
    }

    #[test]
    fn advance_is_strictly_later() -> TestResult {
        let previous = Timestamp::now();

        assert!(advance(previous, previous)? > previous);
        assert!(advance(previous, previous.checked_sub(SignedDuration::from_secs(1))?)? > previous);

        Ok(())
    }
}
