//! Command implementations

mod analyze;
mod prices;
mod serve;
mod status;
mod window;

pub use analyze::cmd_analyze;
pub use prices::cmd_prices;
pub use serve::cmd_serve;
pub use status::cmd_status;
pub use window::cmd_best_window;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};

use wattwise_core::{PriceClient, PriceSeries};

/// Fetch the weekly series, with a user-facing failure message
pub(crate) async fn fetch_series(prices: &PriceClient) -> Result<PriceSeries> {
    prices
        .fetch_weekly_series()
        .await
        .context("Failed to fetch energy data. Please try again later.")
}

/// Format a timestamp as a local-time display label, e.g. "Mon 2:00 AM"
pub(crate) fn format_local(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%a %-I:%M %p")
        .to_string()
}
