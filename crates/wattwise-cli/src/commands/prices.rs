//! Weekly price summary command

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use wattwise_core::{PriceClient, PriceSeries};

use super::fetch_series;

pub async fn cmd_prices(prices: &PriceClient) -> Result<()> {
    println!("⚡ Fetching weekly prices ({})...", prices.source());
    let series = fetch_series(prices).await?;

    println!();
    println!(
        "{} hourly samples, {} to {}",
        series.len(),
        super::format_local(series.first().timestamp),
        super::format_local(series.last().timestamp)
    );
    println!();
    println!("{:<12} {:>9} {:>9} {:>9}", "Day", "Min", "Mean", "Max");
    println!("{:-<12} {:->9} {:->9} {:->9}", "", "", "", "");

    for (date, stats) in daily_stats(&series) {
        println!(
            "{:<12} {:>9.4} {:>9.4} {:>9.4}",
            date.format("%a %b %d"),
            stats.min,
            stats.mean,
            stats.max
        );
    }

    Ok(())
}

pub(crate) struct DayStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Per-local-day price statistics, in date order
pub(crate) fn daily_stats(series: &PriceSeries) -> Vec<(NaiveDate, DayStats)> {
    let mut by_day: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for point in series.points() {
        let date = point.timestamp.with_timezone(&Local).date_naive();
        by_day.entry(date).or_default().push(point.price);
    }

    by_day
        .into_iter()
        .map(|(date, prices)| {
            let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let mean = prices.iter().sum::<f64>() / prices.len() as f64;
            (date, DayStats { min, mean, max })
        })
        .collect()
}
