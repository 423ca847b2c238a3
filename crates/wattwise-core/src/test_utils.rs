//! Shared helpers for unit tests

use chrono::{DateTime, TimeZone, Utc};

use crate::models::PricePoint;
use crate::series::PriceSeries;

/// An arbitrary hour-aligned anchor: Monday 2025-06-02 00:00 UTC
pub fn hour(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap() + chrono::Duration::hours(offset)
}

/// Build a validated series of consecutive hourly samples starting at `hour(0)`
pub fn hourly_series(prices: &[f64]) -> PriceSeries {
    let points = prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint::new(hour(i as i64), price))
        .collect();
    PriceSeries::new(points).expect("test series must be valid")
}
