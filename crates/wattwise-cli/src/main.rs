//! WattWise CLI - Energy price dashboard
//!
//! Usage:
//!   wattwise serve --port 3000        Start the dashboard web server
//!   wattwise prices                   Print a per-day summary of the week
//!   wattwise best-window -p 1800 -d 2 Find the cheapest time to run an appliance
//!   wattwise analyze                  AI narrative summary of price trends

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use wattwise_core::{AnalysisClient, PriceClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
            allowed_origins,
        } => commands::cmd_serve(&host, port, static_dir.as_deref(), allowed_origins).await,
        Commands::Prices => commands::cmd_prices(&PriceClient::from_env()).await,
        Commands::BestWindow {
            power_watts,
            duration_hours,
        } => commands::cmd_best_window(&PriceClient::from_env(), power_watts, duration_hours).await,
        Commands::Analyze => {
            commands::cmd_analyze(&PriceClient::from_env(), AnalysisClient::from_env().as_ref())
                .await
        }
        Commands::Status => {
            commands::cmd_status(&PriceClient::from_env(), AnalysisClient::from_env().as_ref())
                .await
        }
    }
}
