//! Remote price generator client
//!
//! Fetches the weekly series from an HTTP price generator service. The
//! response is parsed into a typed payload and run through the
//! `PriceSeries` validator, so a malformed or irregular upstream series
//! surfaces as a provider error instead of corrupting the dashboard.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::PricePoint;
use crate::series::PriceSeries;

use super::PriceProvider;

/// Upper bound on a single fetch; the provider never waits indefinitely
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for a remote weekly price generator
#[derive(Clone)]
pub struct RemoteProvider {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RemoteProvider {
    /// Create a new remote provider
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Create from environment variables
    ///
    /// Requires `WATTWISE_PRICE_URL`; `WATTWISE_PRICE_API_KEY` is optional.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("WATTWISE_PRICE_URL").ok()?;
        let api_key = std::env::var("WATTWISE_PRICE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        Some(Self::new(&base_url, api_key))
    }
}

/// Weekly series payload returned by the generator
#[derive(Debug, Deserialize)]
struct WeeklySeriesResponse {
    series: Vec<RemotePricePoint>,
}

/// One sample in the generator payload
#[derive(Debug, Deserialize)]
struct RemotePricePoint {
    timestamp: DateTime<Utc>,
    price: f64,
}

#[async_trait]
impl PriceProvider for RemoteProvider {
    async fn fetch_weekly_series(&self) -> Result<PriceSeries> {
        let url = format!("{}/v1/prices/weekly", self.base_url);
        debug!(%url, "Fetching weekly price series");

        let mut request = self.http_client.get(&url).timeout(REQUEST_TIMEOUT);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::Provider(format!(
                "price generator returned HTTP {}",
                response.status()
            )));
        }

        let payload: WeeklySeriesResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Price generator payload did not match schema");
            Error::Provider(format!("unexpected price generator payload: {}", e))
        })?;

        let points = payload
            .series
            .into_iter()
            .map(|p| PricePoint::new(p.timestamp, p.price))
            .collect();

        // Upstream data gets no benefit of the doubt: the same invariants
        // the search relies on are enforced here.
        PriceSeries::new(points)
    }

    fn source(&self) -> &'static str {
        "remote"
    }
}
