//! Price series providers
//!
//! A provider supplies the weekly hourly `PriceSeries` the dashboard runs
//! on, either synthetically generated or fetched from a remote price
//! generator service.
//!
//! # Architecture
//!
//! - `PriceProvider` trait: the async, fallible fetch boundary
//! - `PriceClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Implementations: `SimulatedProvider`, `RemoteProvider`
//!
//! # Configuration
//!
//! Environment variables:
//! - `WATTWISE_PRICE_URL`: base URL of a remote price generator. When set,
//!   prices are fetched from it; otherwise the simulated provider is used.
//! - `WATTWISE_PRICE_API_KEY`: optional bearer token for the remote generator.

mod remote;
mod simulated;

pub use remote::RemoteProvider;
pub use simulated::SimulatedProvider;

use async_trait::async_trait;

use crate::error::Result;
use crate::series::PriceSeries;

/// Hourly samples in a full trailing week
pub const WEEK_HOURS: usize = 7 * 24;

/// The asynchronous price-fetch boundary
///
/// A successful fetch returns a series spanning the trailing seven days at
/// hourly granularity, already validated against the `PriceSeries`
/// invariants. Failures are explicit error values; callers render them, the
/// provider never does.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch the trailing week of hourly prices
    async fn fetch_weekly_series(&self) -> Result<PriceSeries>;

    /// Short name of the backing source (for logging and health reporting)
    fn source(&self) -> &'static str;
}

/// Concrete price client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum PriceClient {
    /// Locally generated synthetic prices
    Simulated(SimulatedProvider),
    /// Remote price generator over HTTP
    Remote(RemoteProvider),
}

impl PriceClient {
    /// Create a price client from environment variables
    ///
    /// Uses the remote generator when `WATTWISE_PRICE_URL` is set, otherwise
    /// falls back to the simulated provider so the dashboard works out of
    /// the box.
    pub fn from_env() -> Self {
        match std::env::var("WATTWISE_PRICE_URL") {
            Ok(url) if !url.trim().is_empty() => {
                let api_key = std::env::var("WATTWISE_PRICE_API_KEY")
                    .ok()
                    .filter(|k| !k.is_empty());
                PriceClient::Remote(RemoteProvider::new(url.trim(), api_key))
            }
            _ => PriceClient::Simulated(SimulatedProvider::new()),
        }
    }

    /// Create a simulated client (used by tests and offline development)
    pub fn simulated() -> Self {
        PriceClient::Simulated(SimulatedProvider::new())
    }

    pub async fn fetch_weekly_series(&self) -> Result<PriceSeries> {
        match self {
            PriceClient::Simulated(p) => p.fetch_weekly_series().await,
            PriceClient::Remote(p) => p.fetch_weekly_series().await,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            PriceClient::Simulated(p) => p.source(),
            PriceClient::Remote(p) => p.source(),
        }
    }
}
