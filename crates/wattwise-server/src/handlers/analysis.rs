//! Narrative analysis handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::{AppError, AppState};

/// Response for the analysis panel
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub summary: String,
    pub model: String,
}

/// GET /api/analysis - AI-generated summary of the weekly price trends
///
/// Three distinct failure states, none of which block the rest of the
/// dashboard:
/// - no series: the upstream fetch failed (502)
/// - no backend: analysis is unconfigured, a configuration state (503)
/// - backend call failed: transient, worth retrying later (502)
pub async fn get_analysis(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let series = state.series()?;

    let client = state.analysis.as_ref().ok_or_else(|| {
        AppError::unavailable("AI analysis is not configured. Set GEMINI_API_KEY to enable it.")
    })?;

    let summary = match state.narrative(client, series).await {
        Ok(summary) => summary.to_string(),
        Err(e) => {
            warn!(error = %e, model = client.model(), "Narrative analysis failed");
            return Err(AppError::bad_gateway(
                "The AI analysis is currently unavailable. Please try again later.",
            ));
        }
    };

    Ok(Json(AnalysisResponse {
        summary,
        model: client.model().to_string(),
    }))
}
