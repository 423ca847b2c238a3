//! Simulated weekly price data
//!
//! Generates a week of hourly prices with realistic time-of-use shape:
//! expensive late-afternoon peak, cheap overnight trough, mild fluctuation
//! in the shoulder hours and a weekend discount. Stands in for a live
//! market-data feed during development and tests.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::Result;
use crate::models::PricePoint;
use crate::series::PriceSeries;

use super::{PriceProvider, WEEK_HOURS};

/// Synthetic price generator with time-of-use shape
#[derive(Debug, Clone, Default)]
pub struct SimulatedProvider {
    /// Fixed RNG seed; `None` draws fresh entropy per fetch
    seed: Option<u64>,
}

impl SimulatedProvider {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Deterministic variant: identical series on every fetch
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Generate the trailing week ending at `end` (which must be hour-aligned)
    fn generate(&self, end: DateTime<Utc>) -> Result<PriceSeries> {
        let mut rng: StdRng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let start = end - Duration::hours(WEEK_HOURS as i64 - 1);
        let mut points = Vec::with_capacity(WEEK_HOURS);

        for i in 0..WEEK_HOURS {
            let timestamp = start + Duration::hours(i as i64);
            points.push(PricePoint::new(timestamp, sample_price(timestamp, &mut rng)));
        }

        PriceSeries::new(points)
    }
}

/// One hour's simulated price in $/kWh
fn sample_price(timestamp: DateTime<Utc>, rng: &mut StdRng) -> f64 {
    let hour = timestamp.hour();

    let mut price = 0.10;

    if (16..=20).contains(&hour) {
        // Late-afternoon/evening peak
        price += 0.15 * rng.gen::<f64>() + 0.05;
    } else if hour <= 5 {
        // Overnight trough
        price -= 0.05 * rng.gen::<f64>() + 0.02;
    } else {
        // Shoulder hours: mild fluctuation
        price += (rng.gen::<f64>() - 0.5) * 0.04;
    }

    if matches!(timestamp.weekday(), Weekday::Sat | Weekday::Sun) {
        price *= 0.8;
    }

    // Clamp away from zero, then quote at mill precision
    round4(price.max(0.02))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Truncate a timestamp to the start of its hour
fn current_hour() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .expect("zeroing sub-hour fields is always valid")
}

#[async_trait]
impl PriceProvider for SimulatedProvider {
    async fn fetch_weekly_series(&self) -> Result<PriceSeries> {
        let series = self.generate(current_hour())?;
        debug!(
            samples = series.len(),
            from = %series.first().timestamp,
            to = %series.last().timestamp,
            "Generated simulated price series"
        );
        Ok(series)
    }

    fn source(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::hour;

    #[test]
    fn generates_a_full_week_of_hourly_samples() {
        let series = SimulatedProvider::with_seed(7).generate(hour(0)).unwrap();
        assert_eq!(series.len(), WEEK_HOURS);
        assert_eq!(series.last().timestamp, hour(0));
        assert_eq!(
            series.first().timestamp,
            hour(0) - Duration::hours(WEEK_HOURS as i64 - 1)
        );
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let provider = SimulatedProvider::with_seed(42);
        let a = provider.generate(hour(0)).unwrap();
        let b = provider.generate(hour(0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn prices_are_floored_and_quoted_at_mill_precision() {
        let series = SimulatedProvider::with_seed(3).generate(hour(0)).unwrap();
        for point in series.points() {
            assert!(point.price >= 0.02, "price {} below floor", point.price);
            let scaled = point.price * 10_000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "price {} not rounded to 4 decimals",
                point.price
            );
        }
    }

    #[tokio::test]
    async fn fetch_produces_a_valid_series() {
        let series = SimulatedProvider::new().fetch_weekly_series().await.unwrap();
        assert_eq!(series.len(), WEEK_HOURS);
    }
}
