//! Mock backend for testing
//!
//! Returns a canned summary without any network traffic. Useful for unit
//! tests and development without a Gemini API key.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::series::PriceSeries;

use super::AnalysisBackend;

/// Mock analysis backend for testing
#[derive(Clone)]
pub struct MockBackend {
    /// Whether analyze/health_check should succeed
    pub healthy: bool,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a new mock backend (healthy by default)
    pub fn new() -> Self {
        Self { healthy: true }
    }

    /// Create a mock backend whose calls fail (transient-error path)
    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl AnalysisBackend for MockBackend {
    async fn analyze(&self, series: &PriceSeries) -> Result<String> {
        if !self.healthy {
            return Err(Error::Analysis("mock analysis backend is unavailable".into()));
        }

        Ok(format!(
            "**Executive Summary:** Prices over the analyzed {} hours follow a steady \
             daily rhythm.\n\
             **Cheapest Times:** Overnight, roughly midnight to 5 AM.\n\
             **Most Expensive Times:** Late afternoon into the evening, 4 PM to 8 PM.\n\
             **Actionable Tip:** Shift flexible loads like dishwashers and EV charging \
             into the overnight hours.",
            series.len().min(super::MAX_ANALYZED_SAMPLES)
        ))
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::hourly_series;

    #[tokio::test]
    async fn healthy_mock_returns_a_summary() {
        let series = hourly_series(&[0.1, 0.2]);
        let summary = MockBackend::new().analyze(&series).await.unwrap();
        assert!(summary.contains("Executive Summary"));
    }

    #[tokio::test]
    async fn unhealthy_mock_fails_analysis() {
        let series = hourly_series(&[0.1, 0.2]);
        assert!(MockBackend::unhealthy().analyze(&series).await.is_err());
        assert!(!MockBackend::unhealthy().health_check().await);
    }
}
