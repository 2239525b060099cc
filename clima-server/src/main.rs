//! Binary crate for the `clima-server` HTTP service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and resolving configuration
//! - Logging setup
//! - Building the router and serving it

use clap::Parser;

mod cli;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
