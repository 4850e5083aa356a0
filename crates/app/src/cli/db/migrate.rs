use std::time::Duration;

use clap::Args;
use tracing::info;
use turtleman_app::database::{self, PoolSettings};

use crate::cli::CliError;

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Seconds to wait for a connection
    #[arg(long, env = "DATABASE_ACQUIRE_TIMEOUT_SECS", default_value_t = 5_u64)]
    acquire_timeout_secs: u64,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), CliError> {
    let settings = PoolSettings {
        max_connections: 1,
        acquire_timeout: Duration::from_secs(args.acquire_timeout_secs),
    };

    let pool = database::connect(&args.database_url, settings)
        .await
        .map_err(CliError::Connect)?;

    let applied = database::migrate(&pool).await.map_err(CliError::Migrate);

    pool.close().await;

    applied?;

    info!("customer schema is up to date");

    Ok(())
}
