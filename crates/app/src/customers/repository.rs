//! Customers Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, PgPool, Postgres, Row,
    error::ErrorKind,
    postgres::{PgDatabaseError, PgRow},
    query, query_as, query_scalar,
};
use turtleman::customers::{
    data::CustomerDraft,
    records::{CustomerId, CustomerRecord},
    store::{CustomerStore, StoreError},
};

const FIND_CUSTOMER_SQL: &str = include_str!("sql/find_customer.sql");
const INSERT_CUSTOMER_SQL: &str = include_str!("sql/insert_customer.sql");
const UPDATE_CUSTOMER_SQL: &str = include_str!("sql/update_customer.sql");
const CUSTOMER_EXISTS_SQL: &str = include_str!("sql/customer_exists.sql");
const DELETE_CUSTOMER_SQL: &str = include_str!("sql/delete_customer.sql");

/// [`CustomerStore`] backed by the `customers` table.
#[derive(Debug, Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
}

impl PgCustomerStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn find(&self, id: CustomerId) -> Result<Option<CustomerRecord>, StoreError> {
        let row = query_as::<Postgres, CustomerRow>(FIND_CUSTOMER_SQL)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)?;

        Ok(row.map(CustomerRow::into_record))
    }

    async fn save(&self, candidate: CustomerDraft) -> Result<CustomerRecord, StoreError> {
        let Some(id) = candidate.existing_id() else {
            let row = query_as::<Postgres, CustomerRow>(INSERT_CUSTOMER_SQL)
                .bind(&candidate.first_name)
                .bind(&candidate.last_name)
                .bind(&candidate.email)
                .fetch_one(&self.pool)
                .await
                .map_err(classify)?;

            return Ok(row.into_record());
        };

        query_as::<Postgres, CustomerRow>(UPDATE_CUSTOMER_SQL)
            .bind(id.get())
            .bind(&candidate.first_name)
            .bind(&candidate.last_name)
            .bind(&candidate.email)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)?
            .map(CustomerRow::into_record)
            .ok_or(StoreError::NotFound(id))
    }

    async fn exists(&self, id: CustomerId) -> Result<bool, StoreError> {
        query_scalar::<Postgres, bool>(CUSTOMER_EXISTS_SQL)
            .bind(id.get())
            .fetch_one(&self.pool)
            .await
            .map_err(classify)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), StoreError> {
        query(DELETE_CUSTOMER_SQL)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(())
    }
}

/// Sort a database failure into constraint violations and everything else.
fn classify(error: sqlx::Error) -> StoreError {
    let Some(database_error) = error.as_database_error() else {
        return StoreError::other(error);
    };

    match database_error.kind() {
        ErrorKind::UniqueViolation => StoreError::Unique {
            constraint: database_error.constraint().map(str::to_string),
        },
        ErrorKind::NotNullViolation => StoreError::NotNull {
            column: database_error
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(PgDatabaseError::column)
                .map(str::to_string),
        },
        ErrorKind::Other | _ => StoreError::other(error),
    }
}

struct CustomerRow(CustomerRecord);

impl CustomerRow {
    fn into_record(self) -> CustomerRecord {
        self.0
    }
}

impl<'r> FromRow<'r, PgRow> for CustomerRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self(CustomerRecord {
            id: CustomerId::new(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            modified_at: row.try_get::<SqlxTimestamp, _>("modified_at")?.to_jiff(),
        }))
    }
}
