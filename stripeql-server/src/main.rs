//! stripeql server binary
//!
//! Serves a GraphQL schema generated from the payment API client.

use anyhow::Result;
use clap::Parser;

use stripeql_config::{ConfigLoader, StripeQlConfig};
use stripeql_server::{init_logging, Cli, Server};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Print default configuration if requested
    if cli.print_config {
        println!("{}", StripeQlConfig::generate_sample());
        return Ok(());
    }

    // Load configuration, then override with CLI arguments
    let mut config = ConfigLoader::new().load(cli.config.as_ref())?;
    cli.apply_overrides(&mut config)?;

    init_logging(&config.logging)?;

    let server = Server::new(config).inspect_err(|e| tracing::error!("Startup failed: {:#}", e))?;
    server.start().await
}
