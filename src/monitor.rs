//! Monitor loop: fetch, preprocess, train, forecast, sleep
//!
//! Single-threaded by design. The monitor is the sole owner and mutator
//! of the data store; each cycle step is internally guarded so no fetch
//! or training failure can stop iteration. Only ctrl-c ends the loop.

use crate::client::ReadingSource;
use crate::config::MonitorConfig;
use crate::model;
use crate::preprocess;
use crate::store::DataStore;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct Monitor {
    config: MonitorConfig,
    source: Box<dyn ReadingSource>,
    store: DataStore,
}

impl Monitor {
    pub fn new(config: MonitorConfig, source: Box<dyn ReadingSource>) -> Self {
        Self {
            config,
            source,
            store: DataStore::new(),
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// One fetch step: poll the source and append complete records.
    ///
    /// Any source error is a soft failure: logged, store untouched.
    /// The reported count is records seen in the response, not records
    /// appended.
    pub async fn fetch_step(&mut self) {
        match self.source.fetch_readings().await {
            Ok(batch) => {
                let fetched = batch.len();
                let appended = self.store.append_batch(batch);
                info!("Fetched {} records.", fetched);
                if appended < fetched {
                    debug!("Skipped {} incomplete records", fetched - appended);
                }
            }
            Err(e) => {
                warn!("Failed to fetch data: {}", e);
            }
        }
    }

    /// One training step: clean, derive samples, fit, forecast.
    ///
    /// The row gate reads the store size before cleaning, matching the
    /// original pipeline order; cleaning may therefore leave fewer
    /// usable rows than the gate suggests, and the model layer skips
    /// degenerate inputs on its own.
    pub fn train_step(&mut self) {
        if self.store.len() <= self.config.min_store_rows {
            debug!(
                "Skipping training: {} rows, need more than {}",
                self.store.len(),
                self.config.min_store_rows
            );
            return;
        }

        let removed = preprocess::clean_store(&mut self.store);
        if removed > 0 {
            debug!("Dropped {} rows with unparseable timestamps", removed);
        }

        let samples = preprocess::derive_samples(&self.store);
        let report = match model::train_and_forecast(
            &samples,
            self.config.test_fraction,
            self.config.split_seed,
            self.config.forecast_horizon_secs,
        ) {
            Some(r) => r,
            None => {
                warn!(
                    "Skipping training: only {} usable rows after cleaning",
                    samples.len()
                );
                return;
            }
        };

        info!("Model trained. MSE: {:.2}", report.mse);
        info!(
            "Predicted soil moisture for next time: {:.2}%. Condition: {}",
            report.predicted, report.condition
        );
    }

    /// Run one full cycle. Never fails; both steps are guarded.
    pub async fn run_cycle(&mut self) {
        self.fetch_step().await;
        self.train_step();
    }

    /// Poll until interrupted. The sleep between cycles is the only
    /// suspension point besides the network call itself.
    pub async fn run(&mut self) {
        info!(
            "Starting soil monitor, endpoint={}, interval={}s",
            self.config.endpoint_url, self.config.poll_interval_secs
        );

        loop {
            self.run_cycle().await;

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(self.config.poll_interval_secs)) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Process interrupted.");
                    break;
                }
            }
        }
    }
}
