//! Narrative price-trend analysis
//!
//! Turns the validated weekly series into a free-form natural-language
//! summary via an external generative-AI text service.
//!
//! # Architecture
//!
//! - `AnalysisBackend` trait: the async, fallible analysis boundary
//! - `AnalysisClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Implementations: `GeminiBackend`, `MockBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `GEMINI_API_KEY`: Gemini API key. Required for the Gemini backend;
//!   when absent the analyzer is unconfigured and the rest of the dashboard
//!   keeps working.
//! - `GEMINI_MODEL`: model name (default: gemini-2.5-flash)
//! - `WATTWISE_AI_BACKEND`: set to `mock` to force the mock backend.

mod gemini;
mod mock;

pub use gemini::GeminiBackend;
pub use mock::MockBackend;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::series::PriceSeries;

/// Practical cap on how many samples are worth sending to the analyzer;
/// the trailing week is what the prompt asks about.
pub const MAX_ANALYZED_SAMPLES: usize = 168;

/// The asynchronous narrative-analysis boundary
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Summarize price trends in the series as readable prose
    async fn analyze(&self, series: &PriceSeries) -> Result<String>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool;

    /// Get the model name (for logging and health reporting)
    fn model(&self) -> &str;
}

/// Concrete analysis client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum AnalysisClient {
    /// Google Gemini generateContent API
    Gemini(GeminiBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl AnalysisClient {
    /// Create an analysis client from environment variables
    ///
    /// Returns `None` when no backend is configured. Callers surface that as
    /// a configuration state, distinct from a transient analysis failure.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("WATTWISE_AI_BACKEND").unwrap_or_default();
        match backend.to_lowercase().as_str() {
            "mock" => Some(AnalysisClient::Mock(MockBackend::new())),
            "" | "gemini" => GeminiBackend::from_env().map(AnalysisClient::Gemini),
            other => {
                tracing::warn!(backend = %other, "Unknown WATTWISE_AI_BACKEND, falling back to gemini");
                GeminiBackend::from_env().map(AnalysisClient::Gemini)
            }
        }
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        AnalysisClient::Mock(MockBackend::new())
    }

    pub async fn analyze(&self, series: &PriceSeries) -> Result<String> {
        match self {
            AnalysisClient::Gemini(b) => b.analyze(series).await,
            AnalysisClient::Mock(b) => b.analyze(series).await,
        }
    }

    pub async fn health_check(&self) -> bool {
        match self {
            AnalysisClient::Gemini(b) => b.health_check().await,
            AnalysisClient::Mock(b) => b.health_check().await,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            AnalysisClient::Gemini(b) => b.model(),
            AnalysisClient::Mock(b) => b.model(),
        }
    }
}

/// One row of the price table embedded in the prompt
#[derive(Serialize)]
struct PromptRow {
    date: String,
    hour: u32,
    price: String,
}

/// Build the analyst prompt over at most the trailing week of samples
pub(crate) fn analysis_prompt(series: &PriceSeries) -> Result<String> {
    use chrono::Timelike;

    let rows: Vec<PromptRow> = series
        .tail(MAX_ANALYZED_SAMPLES)
        .iter()
        .map(|p| PromptRow {
            date: p.timestamp.format("%Y-%m-%d").to_string(),
            hour: p.timestamp.hour(),
            price: format!("{:.4}", p.price),
        })
        .collect();

    let data = serde_json::to_string_pretty(&rows)?;

    Ok(format!(
        "You are an expert energy cost analyst. Your task is to provide a clear, concise, \
         and actionable summary based on the provided hourly electricity price data for the \
         last 7 days. The price is in $/kWh.\n\
         \n\
         Analyze the following data:\n\
         {data}\n\
         \n\
         Based on this data, provide the following in your response:\n\
         1. **Executive Summary:** A brief, 1-2 sentence overview of the price trends.\n\
         2. **Cheapest Times:** Identify the general time windows (e.g., \"early morning \
         hours between 2 AM and 5 AM\") when electricity is consistently cheapest.\n\
         3. **Most Expensive Times:** Identify the general time windows (e.g., \"late \
         afternoon and evening from 4 PM to 8 PM\") when electricity is most expensive.\n\
         4. **Actionable Tip:** Offer one practical, easy-to-implement tip for a homeowner \
         to save money based on these patterns (e.g., \"Consider running your dishwasher or \
         charging your EV during the low-cost overnight hours.\").\n\
         \n\
         Keep the tone helpful, friendly, and easy for a non-expert to understand. Do not \
         just repeat the data; provide insights."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::hourly_series;

    #[test]
    fn prompt_includes_price_rows_and_instructions() {
        let series = hourly_series(&[0.1234, 0.4567]);
        let prompt = analysis_prompt(&series).unwrap();
        assert!(prompt.contains("energy cost analyst"));
        assert!(prompt.contains("0.1234"));
        assert!(prompt.contains("0.4567"));
        assert!(prompt.contains("Actionable Tip"));
    }

    #[test]
    fn prompt_is_capped_at_the_trailing_week() {
        let prices: Vec<f64> = (0..200).map(|i| 0.10 + (i as f64) * 0.0001).collect();
        let series = hourly_series(&prices);
        let prompt = analysis_prompt(&series).unwrap();

        // Sample 200 - 168 = 32 is the first one included
        assert!(prompt.contains("0.1032"));
        // Earlier samples are trimmed away
        assert!(!prompt.contains("0.1031"));
        assert!(prompt.contains("0.1199"));
    }
}
