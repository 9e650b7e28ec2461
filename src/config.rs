//! Monitor configuration
//!
//! There is deliberately no config file, CLI flag or environment lookup:
//! the tool runs against one fixed endpoint with fixed timings. The struct
//! exists so tests can vary the knobs.

/// Fixed soil-data endpoint polled by the monitor.
pub const DEFAULT_ENDPOINT: &str = "https://techvegan.in/pdeu-project/soil-data-ml.php";

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Endpoint returning the JSON array of readings
    pub endpoint_url: String,
    /// Delay between cycles in seconds
    pub poll_interval_secs: u64,
    /// Forecast offset from the latest observation, in seconds
    pub forecast_horizon_secs: i64,
    /// Training runs only when the store holds more rows than this
    pub min_store_rows: usize,
    /// Fraction of samples held out for evaluation
    pub test_fraction: f64,
    /// Shuffle seed for the train/test split
    pub split_seed: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            poll_interval_secs: 10,
            forecast_horizon_secs: 600, // 10 minutes ahead
            min_store_rows: 5,
            test_fraction: 0.2,
            split_seed: 42,
        }
    }
}
