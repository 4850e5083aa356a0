//! Record service behaviour against the in-process store.

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use testresult::TestResult;

use turtleman::{
    customers::{
        CustomersService, CustomersServiceError, RecordService,
        data::CustomerDraft,
        records::CustomerId,
    },
    stores::MemoryCustomerStore,
};

fn service() -> (Arc<MemoryCustomerStore>, RecordService) {
    let store = Arc::new(MemoryCustomerStore::new());

    (store.clone(), RecordService::new(store))
}

#[tokio::test]
async fn create_duplicate_update_delete_scenario() -> TestResult {
    let (store, customers) = service();

    let created = customers
        .upsert(CustomerDraft::new("Man", "Turtle", "man@turtle.sea"))
        .await?;

    assert!(created.id.get() > 0);
    assert!(created.created_at <= created.modified_at);

    let duplicate = customers
        .upsert(CustomerDraft::new("Man", "Turtle", "man@turtle.sea"))
        .await;

    assert!(
        matches!(duplicate, Err(CustomersServiceError::DuplicateEmail)),
        "expected DuplicateEmail, got {duplicate:?}"
    );

    let updated = customers
        .upsert(CustomerDraft::new("wow", "really", "even@new.email").with_id(created.id))
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "wow");
    assert_eq!(updated.last_name, "really");
    assert_eq!(updated.email, "even@new.email");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.modified_at > created.modified_at);

    assert!(customers.delete(created.id).await?);
    assert_eq!(customers.get_by_id(created.id).await?, None);
    assert!(store.is_empty().await);

    Ok(())
}

#[tokio::test]
async fn created_timestamps_are_close_to_now() -> TestResult {
    let (_, customers) = service();
    let before = Timestamp::now();

    let created = customers
        .upsert(CustomerDraft::new("Man", "Turtle", "man@turtle.sea"))
        .await?;

    let after = Timestamp::now();

    assert!(created.created_at >= before && created.created_at <= after);
    assert!(after.duration_since(created.modified_at) < SignedDuration::from_secs(5));

    Ok(())
}

#[tokio::test]
async fn delete_is_idempotent() -> TestResult {
    let (_, customers) = service();
    let created = customers
        .upsert(CustomerDraft::new("Man", "Turtle", "man@turtle.sea"))
        .await?;

    assert!(customers.delete(created.id).await?);
    assert!(!customers.delete(created.id).await?);

    Ok(())
}

#[tokio::test]
async fn deleting_missing_id_leaves_others_untouched() -> TestResult {
    let (store, customers) = service();
    let kept = customers
        .upsert(CustomerDraft::new("Man", "Turtle", "man@turtle.sea"))
        .await?;

    assert!(!customers.delete(CustomerId::new(kept.id.get() + 100)).await?);
    assert_eq!(customers.get_by_id(kept.id).await?, Some(kept));
    assert_eq!(store.len().await, 1);

    Ok(())
}

#[tokio::test]
async fn updating_one_customer_leaves_another_alone() -> TestResult {
    let (_, customers) = service();
    let a = customers
        .upsert(CustomerDraft::new("Ann", "Turtle", "ann@turtle.sea"))
        .await?;
    let b = customers
        .upsert(CustomerDraft::new("Bob", "Turtle", "bob@turtle.sea"))
        .await?;

    customers
        .upsert(CustomerDraft::new("Anne", "Tortoise", "anne@turtle.sea").with_id(a.id))
        .await?;

    assert_eq!(customers.get_by_id(b.id).await?, Some(b));

    Ok(())
}

#[tokio::test]
async fn update_cannot_take_another_customers_email() -> TestResult {
    let (_, customers) = service();
    let a = customers
        .upsert(CustomerDraft::new("Ann", "Turtle", "ann@turtle.sea"))
        .await?;
    customers
        .upsert(CustomerDraft::new("Bob", "Turtle", "bob@turtle.sea"))
        .await?;

    let result = customers
        .upsert(CustomerDraft::new("Ann", "Turtle", "bob@turtle.sea").with_id(a.id))
        .await;

    assert!(
        matches!(result, Err(CustomersServiceError::DuplicateEmail)),
        "expected DuplicateEmail, got {result:?}"
    );
    assert_eq!(
        customers.get_by_id(a.id).await?.map(|c| c.email),
        Some("ann@turtle.sea".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn updating_unknown_id_is_a_validation_error() -> TestResult {
    let (store, customers) = service();

    let result = customers
        .upsert(CustomerDraft::new("Man", "Turtle", "man@turtle.sea").with_id(CustomerId::new(12)))
        .await;

    assert!(
        matches!(&result, Err(CustomersServiceError::Validation(errors)) if errors.contains("id")),
        "expected id Validation, got {result:?}"
    );
    assert!(store.is_empty().await);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_inserts_with_same_email_have_one_winner() -> TestResult {
    let (store, customers) = service();
    let customers = Arc::new(customers);

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let customers = Arc::clone(&customers);

            tokio::spawn(async move {
                customers
                    .upsert(CustomerDraft::new(format!("Racer{n}"), "Turtle", "race@turtle.sea"))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    let mut duplicates = 0;

    for handle in handles {
        match handle.await? {
            Ok(_) => created += 1,
            Err(CustomersServiceError::DuplicateEmail) => duplicates += 1,
            Err(error) => return Err(error.into()),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(duplicates, 15);
    assert_eq!(store.len().await, 1);

    Ok(())
}
