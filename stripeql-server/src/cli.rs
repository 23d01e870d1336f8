//! Command line interface

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use stripeql_config::domains::logging::LogLevel;
use stripeql_config::{ResolveMode, StripeQlConfig};

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "GraphQL gateway over the Stripe API", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Server bind address
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Perform API calls but discard their results (no credential needed)
    #[arg(long)]
    pub discard_results: bool,

    /// Disable the GraphiQL page
    #[arg(long)]
    pub no_graphiql: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print default configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Apply CLI argument overrides to configuration
    pub fn apply_overrides(&self, config: &mut StripeQlConfig) -> Result<()> {
        if let Some(bind) = &self.bind {
            config.server.bind_address = bind.clone();
        }

        if let Some(port) = self.port {
            config.server.port = port;
        }

        if self.discard_results {
            config.graphql.resolve_mode = ResolveMode::Discard;
        }

        if self.no_graphiql {
            config.graphql.enable_graphiql = false;
        }

        if let Some(level) = &self.log_level {
            config.logging.level = LogLevel::from_str(level).map_err(|e| anyhow!(e))?;
        }

        config.validate_all()?;
        Ok(())
    }
}
