//! Configuration status command

use anyhow::Result;

use wattwise_core::{AnalysisClient, PriceClient};

pub async fn cmd_status(prices: &PriceClient, analysis: Option<&AnalysisClient>) -> Result<()> {
    println!("WattWise configuration");
    println!("   Price source: {}", prices.source());

    match analysis {
        Some(client) => {
            let responding = client.health_check().await;
            println!(
                "   AI analysis:  {} ({})",
                client.model(),
                if responding {
                    "responding"
                } else {
                    "not responding"
                }
            );
        }
        None => {
            println!("   AI analysis:  not configured (set GEMINI_API_KEY)");
        }
    }

    Ok(())
}
