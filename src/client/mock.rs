//! Mock reading source for testing
//!
//! Scripted responses, one per fetch call, so tests can drive the
//! monitor loop through success and failure cycles without a network.

use crate::client::ReadingSource;
use crate::error::{MonitorError, Result};
use crate::types::RawReading;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Queue-backed [`ReadingSource`]: each call pops the next scripted
/// outcome. An exhausted queue yields an empty batch.
#[derive(Default)]
pub struct MockReadingSource {
    responses: Mutex<VecDeque<Result<Vec<RawReading>>>>,
    calls: Mutex<u64>,
}

impl MockReadingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful batch for the next unanswered fetch.
    pub fn push_batch(&self, batch: Vec<RawReading>) {
        self.responses.lock().unwrap().push_back(Ok(batch));
    }

    /// Script a failure for the next unanswered fetch.
    pub fn push_failure(&self, err: MonitorError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Number of fetches answered so far.
    pub fn call_count(&self) -> u64 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ReadingSource for MockReadingSource {
    async fn fetch_readings(&self) -> Result<Vec<RawReading>> {
        *self.calls.lock().unwrap() += 1;
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
