//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;
use turtleman::{
    customers::{CustomerStore, CustomersService, RecordService},
    stores::MemoryCustomerStore,
};

use crate::{
    customers::PgCustomerStore,
    database::{self, PoolSettings},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub customers: Arc<dyn CustomersService>,
}

impl AppContext {
    /// Wire the customer service to `store`.
    #[must_use]
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self {
            customers: Arc::new(RecordService::new(store)),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying migrations fails.
    pub async fn from_database_url(
        url: &str,
        settings: PoolSettings,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, settings)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        info!(
            max_connections = settings.max_connections,
            "connected to PostgreSQL customer store"
        );

        Ok(Self::new(Arc::new(PgCustomerStore::new(pool))))
    }

    /// Build application context over a fresh in-process store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCustomerStore::new()))
    }
}
