//! `turtleman-app` command line.

use clap::{Parser, Subcommand};
use thiserror::Error;

mod db;

#[derive(Debug, Parser)]
#[command(
    name = "turtleman-app",
    about = "TurtleMan customer store maintenance",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Customer database maintenance
    Db(db::DbCommand),
}

/// Failures surfaced by CLI commands.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to apply migrations: {0}")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), CliError> {
        match self.command {
            Commands::Db(command) => command.run().await,
        }
    }
}
