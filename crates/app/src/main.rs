//! TurtleMan maintenance CLI

use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
pub async fn main() {
    _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    if let Err(error) = cli::Cli::parse().run().await {
        error!("{error}");

        process::exit(1);
    }
}
