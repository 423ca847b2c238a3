//! Health/status handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Dashboard status summary
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub price_source: String,
    /// Number of samples in the active series, absent when the fetch failed
    pub series_samples: Option<usize>,
    pub fetch_error: Option<String>,
    /// "ready" or "unconfigured"
    pub analysis: String,
    pub analysis_model: Option<String>,
}

/// GET /api/health - Provider and analyzer status
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        price_source: state.price_source.to_string(),
        series_samples: state.series.as_ref().map(|s| s.len()),
        fetch_error: state.fetch_error.clone(),
        analysis: if state.analysis.is_some() {
            "ready".to_string()
        } else {
            "unconfigured".to_string()
        },
        analysis_model: state.analysis.as_ref().map(|c| c.model().to_string()),
    })
}
