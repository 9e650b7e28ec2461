//! HTTP client for the soil-data endpoint
//!
//! The endpoint returns a JSON array of reading objects. Everything that
//! can go wrong at this boundary (transport failure, non-success status,
//! malformed body) surfaces as a [`MonitorError`] and is handled as a
//! soft failure by the monitor loop.

pub mod mock;

pub use mock::MockReadingSource;

use crate::error::{MonitorError, Result};
use crate::types::RawReading;
use async_trait::async_trait;
use reqwest::Client;

/// Source of soil-moisture readings (allows mocking the endpoint).
#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Fetch one batch of readings. Returns every record in the
    /// response, complete or not; validation happens at append time.
    async fn fetch_readings(&self) -> Result<Vec<RawReading>>;
}

/// Live client polling the fixed soil-data URL.
pub struct SoilApiClient {
    http: Client,
    url: String,
}

impl SoilApiClient {
    /// Build a client for the given endpoint.
    ///
    /// No request timeout is set: a hung request stalls the whole loop.
    /// Known weakness of the tool, kept as-is.
    pub fn new(url: &str) -> Result<Self> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ReadingSource for SoilApiClient {
    async fn fetch_readings(&self) -> Result<Vec<RawReading>> {
        let resp = self.http.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(MonitorError::UnexpectedStatus(status));
        }

        // Parse the body separately so a malformed payload is reported
        // as a JSON error rather than a transport error.
        let body = resp.text().await?;
        let readings: Vec<RawReading> = serde_json::from_str(&body)?;
        Ok(readings)
    }
}
