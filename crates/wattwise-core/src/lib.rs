//! WattWise Core Library
//!
//! Shared functionality for the WattWise energy price dashboard:
//! - Validated hourly price series (the data-model contract)
//! - Cheapest/most-expensive appliance run-window search
//! - Price providers (simulated generator, remote generator client)
//! - Narrative analysis backends (Gemini, mock)

pub mod analysis;
pub mod error;
pub mod models;
pub mod provider;
pub mod search;
pub mod series;

#[cfg(test)]
pub(crate) mod test_utils;

pub use analysis::{AnalysisBackend, AnalysisClient, GeminiBackend, MockBackend};
pub use error::{Error, Result};
pub use models::{ApplianceProfile, CostWindows, PricePoint, WindowResult};
pub use provider::{PriceClient, PriceProvider, RemoteProvider, SimulatedProvider, WEEK_HOURS};
pub use search::find_cost_windows;
pub use series::PriceSeries;
