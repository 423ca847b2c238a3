//! Validated hourly price series
//!
//! `PriceSeries` is the data-model contract the rest of the system leans on:
//! hour-aligned timestamps, exactly one hour between consecutive samples,
//! non-negative prices. The window search assumes uniform spacing, so a
//! series that does not satisfy it is rejected at construction instead of
//! silently producing wrong costs.

use chrono::{Duration, Timelike};

use crate::error::{Error, Result};
use crate::models::PricePoint;

/// An immutable, validated sequence of hourly price samples
///
/// Constructed once per fetch cycle by a price provider and shared read-only
/// with the chart, the calculator and the analyzer.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and wrap a sequence of price points
    ///
    /// Requirements:
    /// - at least one sample
    /// - the first timestamp is hour-aligned
    /// - consecutive samples are exactly one hour apart (this implies
    ///   strictly ascending, unique timestamps)
    /// - every price is finite and non-negative
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidSeries("series is empty".into()));
        }

        let first = &points[0];
        if first.timestamp.minute() != 0
            || first.timestamp.second() != 0
            || first.timestamp.nanosecond() != 0
        {
            return Err(Error::InvalidSeries(format!(
                "first sample at {} is not hour-aligned",
                first.timestamp
            )));
        }

        for (i, point) in points.iter().enumerate() {
            if !point.price.is_finite() || point.price < 0.0 {
                return Err(Error::InvalidSeries(format!(
                    "sample at {} has invalid price {}",
                    point.timestamp, point.price
                )));
            }
            if i > 0 {
                let gap = point.timestamp - points[i - 1].timestamp;
                if gap != Duration::hours(1) {
                    return Err(Error::InvalidSeries(format!(
                        "samples at {} and {} are {} minutes apart, expected 60",
                        points[i - 1].timestamp,
                        point.timestamp,
                        gap.num_minutes()
                    )));
                }
            }
        }

        Ok(Self { points })
    }

    /// All samples, in ascending timestamp order
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &PricePoint {
        &self.points[0]
    }

    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    /// The trailing `n` samples (the whole series when it is shorter)
    ///
    /// Used to cap what is sent to the narrative analyzer: the most recent
    /// contiguous window is the part worth summarizing.
    pub fn tail(&self, n: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{hour, hourly_series};
    use chrono::TimeZone;

    #[test]
    fn accepts_hourly_series() {
        let series = hourly_series(&[0.10, 0.30, 0.10, 0.30]);
        assert_eq!(series.len(), 4);
        assert_eq!(series.first().price, 0.10);
        assert_eq!(series.last().timestamp, hour(3));
    }

    #[test]
    fn rejects_empty_series() {
        let err = PriceSeries::new(vec![]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_unaligned_first_sample() {
        let ts = chrono::Utc.with_ymd_and_hms(2025, 6, 2, 0, 30, 0).unwrap();
        let err = PriceSeries::new(vec![PricePoint::new(ts, 0.10)]).unwrap_err();
        assert!(err.to_string().contains("hour-aligned"));
    }

    #[test]
    fn rejects_gap_in_series() {
        let points = vec![
            PricePoint::new(hour(0), 0.10),
            PricePoint::new(hour(1), 0.11),
            PricePoint::new(hour(3), 0.12),
        ];
        let err = PriceSeries::new(points).unwrap_err();
        assert!(err.to_string().contains("120 minutes"));
    }

    #[test]
    fn rejects_duplicate_timestamp() {
        let points = vec![
            PricePoint::new(hour(0), 0.10),
            PricePoint::new(hour(0), 0.11),
        ];
        assert!(PriceSeries::new(points).is_err());
    }

    #[test]
    fn rejects_negative_price() {
        let points = vec![PricePoint::new(hour(0), -0.01)];
        assert!(PriceSeries::new(points).is_err());
    }

    #[test]
    fn rejects_non_finite_price() {
        let points = vec![PricePoint::new(hour(0), f64::NAN)];
        assert!(PriceSeries::new(points).is_err());
    }

    #[test]
    fn tail_returns_trailing_window() {
        let series = hourly_series(&[0.1, 0.2, 0.3, 0.4, 0.5]);
        let tail = series.tail(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].price, 0.4);

        // Shorter series than the cap: everything comes back
        assert_eq!(series.tail(100).len(), 5);
    }
}
