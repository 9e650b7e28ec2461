//! Soil-Moisture Monitor
//!
//! Polls a fixed endpoint for soil-moisture readings and logs a
//! short-term forecast each cycle until interrupted.

use soil_monitor::client::SoilApiClient;
use soil_monitor::config::MonitorConfig;
use soil_monitor::monitor::Monitor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // No CLI flags, config file or env vars: one endpoint, fixed timings.
    let config = MonitorConfig::default();
    let client = SoilApiClient::new(&config.endpoint_url)?;

    let mut monitor = Monitor::new(config, Box::new(client));
    monitor.run().await;

    Ok(())
}
