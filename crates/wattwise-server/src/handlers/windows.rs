//! Appliance run-window calculator handler

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use wattwise_core::{find_cost_windows, ApplianceProfile, WindowResult};

use crate::{AppError, AppState};

use super::round2;

/// Query parameters for the window search
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    /// Appliance power draw in watts
    pub power_watts: f64,
    /// Run duration in whole hours
    pub duration_hours: u32,
}

/// One selected window, formatted for display
#[derive(Debug, Serialize)]
pub struct WindowView {
    pub start_time: DateTime<Utc>,
    /// Local start time label, e.g. "Mon 2:00 AM"
    pub start_label: String,
    /// Total run cost in dollars, rounded to 2 decimals
    pub cost: f64,
}

/// The pair of extremes, or `null` when no window fits
#[derive(Debug, Serialize)]
pub struct WindowsResponse {
    pub result: Option<WindowPair>,
}

#[derive(Debug, Serialize)]
pub struct WindowPair {
    pub cheapest: WindowView,
    pub most_expensive: WindowView,
}

/// GET /api/windows - Cheapest and most expensive run windows
///
/// Non-positive power or duration, or a duration longer than the series,
/// yields an explicit `"result": null` body: that is the normal "no result
/// yet" state of the calculator, not an error.
pub async fn get_windows(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WindowQuery>,
) -> Result<Json<WindowsResponse>, AppError> {
    let series = state.series()?;

    let profile = ApplianceProfile::new(params.power_watts, params.duration_hours);
    let result = find_cost_windows(series, &profile).map(|windows| WindowPair {
        cheapest: view(windows.cheapest),
        most_expensive: view(windows.most_expensive),
    });

    Ok(Json(WindowsResponse { result }))
}

fn view(window: WindowResult) -> WindowView {
    WindowView {
        start_time: window.start_time,
        start_label: window
            .start_time
            .with_timezone(&Local)
            .format("%a %-I:%M %p")
            .to_string(),
        cost: round2(window.cost),
    }
}
