//! Fixed-duration run-window cost search
//!
//! Given a validated hourly price series and an appliance profile, finds the
//! contiguous run of whole hours that minimizes and maximizes total energy
//! cost. This is the one piece of the dashboard with real logic; everything
//! else is plumbing around it.

use crate::models::{ApplianceProfile, CostWindows, PricePoint, WindowResult};
use crate::series::PriceSeries;

/// Find the cheapest and most expensive start times for an appliance run
///
/// Returns `None` when there is nothing to search: empty series, non-positive
/// power or duration, or a requested duration longer than the series. All of
/// these are normal outcomes (e.g. before the first valid user input), not
/// errors.
///
/// Each sample covers one hour of consumption, so a window's total cost is
/// the sum of its hourly prices times the power draw in kilowatts; duration
/// only bounds the window length. Ties go to the earliest window because the
/// tracked extremes are only replaced on strict improvement.
///
/// O(n·d) over at most a week of hourly samples. A sliding running sum would
/// be O(n) but accumulates float error across windows, which would make
/// equal-cost windows compare unequal; summing each window directly keeps
/// tie-breaking exact.
pub fn find_cost_windows(
    series: &PriceSeries,
    appliance: &ApplianceProfile,
) -> Option<CostWindows> {
    if !appliance.is_searchable() {
        return None;
    }

    // A too-long duration also covers the degenerate empty-series case:
    // no window fits, so there is nothing to report.
    let duration = appliance.duration_hours as usize;
    let points = series.points();
    if points.len() < duration {
        return None;
    }

    let power_kw = appliance.power_watts / 1000.0;

    let mut cheapest: Option<WindowResult> = None;
    let mut most_expensive: Option<WindowResult> = None;

    for window in points.windows(duration) {
        let cost = window_cost(window, power_kw);
        let start_time = window[0].timestamp;

        match cheapest {
            Some(ref best) if cost >= best.cost => {}
            _ => cheapest = Some(WindowResult { start_time, cost }),
        }
        match most_expensive {
            Some(ref worst) if cost <= worst.cost => {}
            _ => most_expensive = Some(WindowResult { start_time, cost }),
        }
    }

    Some(CostWindows {
        cheapest: cheapest?,
        most_expensive: most_expensive?,
    })
}

fn window_cost(window: &[PricePoint], power_kw: f64) -> f64 {
    window.iter().map(|p| p.price).sum::<f64>() * power_kw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{hour, hourly_series};

    fn appliance(power_watts: f64, duration_hours: u32) -> ApplianceProfile {
        ApplianceProfile::new(power_watts, duration_hours)
    }

    #[test]
    fn equal_windows_tie_break_to_earliest() {
        // Windows: [0,1] -> 0.40, [1,2] -> 0.40, [2,3] -> 0.40
        let series = hourly_series(&[0.10, 0.30, 0.10, 0.30]);
        let windows = find_cost_windows(&series, &appliance(1000.0, 2)).unwrap();

        assert_eq!(windows.cheapest.start_time, hour(0));
        assert_eq!(windows.most_expensive.start_time, hour(0));
        assert_eq!(windows.cheapest.cost, windows.most_expensive.cost);
    }

    #[test]
    fn finds_extremes_for_single_hour_run() {
        // Costs at 2 kW: 0.10, 0.80, 0.12, 0.90
        let series = hourly_series(&[0.05, 0.40, 0.06, 0.45]);
        let windows = find_cost_windows(&series, &appliance(2000.0, 1)).unwrap();

        assert_eq!(windows.cheapest.start_time, hour(0));
        assert!((windows.cheapest.cost - 0.10).abs() < 1e-12);
        assert_eq!(windows.most_expensive.start_time, hour(3));
        assert!((windows.most_expensive.cost - 0.90).abs() < 1e-12);
    }

    #[test]
    fn no_result_for_zero_duration() {
        let series = hourly_series(&[0.10, 0.20]);
        assert!(find_cost_windows(&series, &appliance(1000.0, 0)).is_none());
    }

    #[test]
    fn no_result_for_non_positive_power() {
        let series = hourly_series(&[0.10, 0.20]);
        assert!(find_cost_windows(&series, &appliance(0.0, 1)).is_none());
        assert!(find_cost_windows(&series, &appliance(-500.0, 1)).is_none());
        assert!(find_cost_windows(&series, &appliance(f64::NAN, 1)).is_none());
    }

    #[test]
    fn no_result_when_window_does_not_fit() {
        let series = hourly_series(&[0.10, 0.20, 0.30]);
        assert!(find_cost_windows(&series, &appliance(1000.0, 5)).is_none());
    }

    #[test]
    fn cheapest_never_exceeds_most_expensive() {
        let series = hourly_series(&[0.22, 0.04, 0.31, 0.09, 0.15, 0.27, 0.05]);
        for duration in 1..=7 {
            let windows = find_cost_windows(&series, &appliance(1800.0, duration)).unwrap();
            assert!(
                windows.cheapest.cost <= windows.most_expensive.cost,
                "duration {}",
                duration
            );
        }
    }

    #[test]
    fn search_is_idempotent() {
        let series = hourly_series(&[0.11, 0.07, 0.19, 0.03]);
        let profile = appliance(1200.0, 2);
        let first = find_cost_windows(&series, &profile).unwrap();
        let second = find_cost_windows(&series, &profile).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn doubling_prices_doubles_costs() {
        let prices = [0.08, 0.17, 0.05, 0.23, 0.12];
        let doubled: Vec<f64> = prices.iter().map(|p| p * 2.0).collect();
        let profile = appliance(1500.0, 3);

        let base = find_cost_windows(&hourly_series(&prices), &profile).unwrap();
        let scaled = find_cost_windows(&hourly_series(&doubled), &profile).unwrap();

        assert_eq!(scaled.cheapest.start_time, base.cheapest.start_time);
        assert_eq!(
            scaled.most_expensive.start_time,
            base.most_expensive.start_time
        );
        assert_eq!(scaled.cheapest.cost, base.cheapest.cost * 2.0);
        assert_eq!(scaled.most_expensive.cost, base.most_expensive.cost * 2.0);
    }

    #[test]
    fn one_kilowatt_for_one_hour_costs_the_sample_price() {
        let series = hourly_series(&[0.13, 0.27, 0.09]);
        let windows = find_cost_windows(&series, &appliance(1000.0, 1)).unwrap();
        // 1 kW for 1 h: the window cost is exactly the hourly price
        assert_eq!(windows.cheapest.cost, 0.09);
        assert_eq!(windows.most_expensive.cost, 0.27);
    }

    #[test]
    fn full_length_window_covers_whole_series() {
        let series = hourly_series(&[0.10, 0.20, 0.30]);
        let windows = find_cost_windows(&series, &appliance(1000.0, 3)).unwrap();
        assert_eq!(windows.cheapest.start_time, hour(0));
        assert_eq!(windows.cheapest.start_time, windows.most_expensive.start_time);
        assert!((windows.cheapest.cost - 0.60).abs() < 1e-12);
    }
}
