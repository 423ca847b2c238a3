//! Appliance run-window command

use anyhow::Result;

use wattwise_core::{find_cost_windows, ApplianceProfile, PriceClient};

use super::{fetch_series, format_local};

pub async fn cmd_best_window(
    prices: &PriceClient,
    power_watts: f64,
    duration_hours: u32,
) -> Result<()> {
    let profile = ApplianceProfile::new(power_watts, duration_hours);
    if !profile.is_searchable() {
        println!("Power and duration must both be positive.");
        return Ok(());
    }

    println!("⚡ Fetching weekly prices ({})...", prices.source());
    let series = fetch_series(prices).await?;

    match find_cost_windows(&series, &profile) {
        Some(windows) => {
            println!();
            println!(
                "Appliance: {:.0} W for {} hour(s)",
                power_watts, duration_hours
            );
            println!();
            println!("✅ Cheapest window to run");
            println!("   Starts at:      {}", format_local(windows.cheapest.start_time));
            println!("   Estimated cost: ${:.2}", windows.cheapest.cost);
            println!();
            println!("💸 Most expensive window to run");
            println!(
                "   Starts at:      {}",
                format_local(windows.most_expensive.start_time)
            );
            println!("   Estimated cost: ${:.2}", windows.most_expensive.cost);
        }
        None => {
            println!(
                "No {}-hour window fits in the {} available samples.",
                duration_hours,
                series.len()
            );
        }
    }

    Ok(())
}
