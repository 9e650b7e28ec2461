//! Timestamp derivation and row cleaning
//!
//! The endpoint reports `date` ("DD-MM-YYYY") and `time` ("hh:mm AM/PM")
//! as separate strings. Each cycle they are recombined, parsed with one
//! fixed layout, and converted to whole seconds since the Unix epoch for
//! use as the regression feature.

use crate::store::DataStore;
use crate::types::{Observation, Sample};
use chrono::NaiveDateTime;

/// The only accepted layout: e.g. "05-06-2024 02:15 PM".
const DATETIME_FORMAT: &str = "%d-%m-%Y %I:%M %p";

/// Parse an observation's combined date+time string.
pub fn parse_datetime(obs: &Observation) -> Option<NaiveDateTime> {
    let combined = format!("{} {}", obs.date, obs.time);
    NaiveDateTime::parse_from_str(&combined, DATETIME_FORMAT).ok()
}

/// Drop every row whose date+time does not parse.
///
/// This mutates the shared store, so malformed rows are purged
/// permanently on the first cycle that processes them. Deliberate:
/// such rows would fail identically every cycle and are dead weight.
/// Returns the number of rows removed.
pub fn clean_store(store: &mut DataStore) -> usize {
    let before = store.len();
    store.retain(|obs| parse_datetime(obs).is_some());
    before - store.len()
}

/// Map the surviving rows to samples, in store order.
///
/// Callers are expected to have run [`clean_store`] first; any row that
/// still fails to parse is skipped rather than panicking.
pub fn derive_samples(store: &DataStore) -> Vec<Sample> {
    store
        .rows()
        .iter()
        .filter_map(|obs| {
            let dt = parse_datetime(obs)?;
            Some(Sample {
                time_numeric: dt.and_utc().timestamp(),
                soil_moisture: obs.soil_moisture,
            })
        })
        .collect()
}
