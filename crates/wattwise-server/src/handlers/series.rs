//! Chart data handler

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{AppError, AppState};

use super::round4;

/// One chart-ready sample
#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    /// Short weekday label for the x-axis ("Mon", "Tue", ...)
    pub label: String,
    /// $/kWh, rounded to 4 decimals
    pub price: f64,
}

/// Response for the weekly series
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub points: Vec<ChartPoint>,
}

/// GET /api/series - The weekly price series, formatted for charting
///
/// Reports the upstream fetch failure when no series is available; the
/// chart and the calculator have nothing to operate on in that state.
pub async fn get_series(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SeriesResponse>, AppError> {
    let series = state.series()?;

    let points = series
        .points()
        .iter()
        .map(|p| ChartPoint {
            timestamp: p.timestamp,
            label: p.timestamp.format("%a").to_string(),
            price: round4(p.price),
        })
        .collect();

    Ok(Json(SeriesResponse { points }))
}
