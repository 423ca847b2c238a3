//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// WattWise - Find the cheapest time to run your appliances
#[derive(Parser)]
#[command(name = "wattwise")]
#[command(about = "Energy price dashboard and appliance cost calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing the browser frontend to serve (e.g. ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Allowed CORS origin (repeatable; default is same-origin only)
        #[arg(long = "allow-origin")]
        allowed_origins: Vec<String>,
    },

    /// Fetch the weekly series and print a per-day price summary
    Prices,

    /// Find the cheapest and most expensive run windows for an appliance
    BestWindow {
        /// Appliance power draw in watts
        #[arg(short = 'p', long)]
        power_watts: f64,

        /// Run duration in whole hours
        #[arg(short = 'd', long)]
        duration_hours: u32,
    },

    /// Ask the AI analyst for a narrative summary of the week's prices
    Analyze,

    /// Show provider and analyzer configuration
    Status,
}
