//! Server command implementation

use std::path::Path;

use anyhow::Result;

use wattwise_core::{AnalysisClient, PriceClient};
use wattwise_server::ServerConfig;

pub async fn cmd_serve(
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
    allowed_origins: Vec<String>,
) -> Result<()> {
    let prices = PriceClient::from_env();
    let analysis = AnalysisClient::from_env();

    println!("🚀 Starting WattWise dashboard server...");
    println!("   Listening: http://{}:{}", host, port);
    println!("   Price source: {}", prices.source());
    match &analysis {
        Some(client) => println!("   AI analysis: {}", client.model()),
        None => println!("   AI analysis: disabled (set GEMINI_API_KEY to enable)"),
    }
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if !allowed_origins.is_empty() {
        println!("   CORS origins: {}", allowed_origins.join(", "));
    }

    let static_dir = static_dir.map(|p| p.to_string_lossy().into_owned());
    let config = ServerConfig { allowed_origins };

    wattwise_server::serve(
        prices,
        analysis,
        host,
        port,
        static_dir.as_deref(),
        config,
    )
    .await
}
