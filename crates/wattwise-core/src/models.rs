//! Domain models for WattWise

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single hourly price sample
///
/// The timestamp marks the start of the hour the price applies to and is
/// always hour-aligned (minute, second and nanosecond are zero). The price
/// is in $/kWh and is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// User-supplied appliance parameters for the run-window calculator
///
/// Both fields must be positive for a search to run. Non-positive (or
/// non-finite) values are a caller-side validation failure: the search
/// yields no result rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplianceProfile {
    /// Appliance power draw in watts
    pub power_watts: f64,
    /// Number of contiguous whole hours the appliance must run
    pub duration_hours: u32,
}

impl ApplianceProfile {
    pub fn new(power_watts: f64, duration_hours: u32) -> Self {
        Self {
            power_watts,
            duration_hours,
        }
    }

    /// Whether the profile can drive a window search at all
    pub fn is_searchable(&self) -> bool {
        self.power_watts.is_finite() && self.power_watts > 0.0 && self.duration_hours > 0
    }
}

/// One selected run window: when to start and what the full run costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowResult {
    /// Timestamp of the first sample in the window
    pub start_time: DateTime<Utc>,
    /// Total energy cost in currency units for the whole run
    pub cost: f64,
}

/// The pair of extreme windows found by a search
///
/// Always produced together; for a series where every window costs the
/// same, both point at the earliest window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostWindows {
    pub cheapest: WindowResult,
    pub most_expensive: WindowResult,
}
