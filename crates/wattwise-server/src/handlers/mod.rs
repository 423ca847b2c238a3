//! HTTP request handlers organized by dashboard panel

pub mod analysis;
pub mod health;
pub mod series;
pub mod windows;

// Re-export all handlers for use in router
pub use analysis::*;
pub use health::*;
pub use series::*;
pub use windows::*;

/// Round a currency amount for display
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a $/kWh price for charting
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
