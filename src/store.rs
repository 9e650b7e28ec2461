//! In-memory accumulator of soil-moisture observations
//!
//! Append-only across fetch cycles; the only removal path is the
//! preprocessing step purging rows whose date+time never parses.
//! Growth is unbounded by design (no eviction, no persistence).

use crate::types::{Observation, RawReading};

/// Ordered store of observations, insertion order preserved.
///
/// Duplicates are permitted: the source may resend overlapping records
/// and there is no identity to dedupe on. Owned and mutated solely by
/// the monitor loop, so no interior locking.
#[derive(Debug, Default)]
pub struct DataStore {
    rows: Vec<Observation>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every complete record from a fetched batch.
    ///
    /// Records missing any of `soil_moisture`, `time` or `date` are
    /// skipped silently. Returns the number actually appended.
    pub fn append_batch(&mut self, batch: Vec<RawReading>) -> usize {
        let before = self.rows.len();
        self.rows
            .extend(batch.into_iter().filter_map(RawReading::into_observation));
        self.rows.len() - before
    }

    pub fn push(&mut self, obs: Observation) {
        self.rows.push(obs);
    }

    /// Permanently drop rows failing the predicate. Used by the
    /// preprocessor to purge rows with unparseable timestamps.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Observation) -> bool,
    {
        self.rows.retain(keep);
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
