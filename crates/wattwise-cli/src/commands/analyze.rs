//! Narrative analysis command

use anyhow::{bail, Result};

use wattwise_core::{AnalysisClient, PriceClient};

use super::fetch_series;

pub async fn cmd_analyze(prices: &PriceClient, analysis: Option<&AnalysisClient>) -> Result<()> {
    let Some(client) = analysis else {
        println!("ℹ️  AI analysis is not configured. Set GEMINI_API_KEY to enable it.");
        return Ok(());
    };

    println!("⚡ Fetching weekly prices ({})...", prices.source());
    let series = fetch_series(prices).await?;

    println!("🤖 {} is analyzing your data...", client.model());
    match client.analyze(&series).await {
        Ok(summary) => {
            println!();
            println!("{}", summary);
            Ok(())
        }
        Err(e) => bail!("The AI analysis is currently unavailable: {}", e),
    }
}
