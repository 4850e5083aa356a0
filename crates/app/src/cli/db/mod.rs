use clap::{Args, Subcommand};

use super::CliError;

mod migrate;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    action: DbAction,
}

#[derive(Debug, Subcommand)]
enum DbAction {
    /// Apply pending schema migrations to the customers database
    Migrate(migrate::MigrateArgs),
}

impl DbCommand {
    pub(super) async fn run(self) -> Result<(), CliError> {
        match self.action {
            DbAction::Migrate(args) => migrate::run(args).await,
        }
    }
}
