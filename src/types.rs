//! Core data types for readings, derived samples and forecast labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of the endpoint's JSON array, as received.
///
/// All fields are optional: the source occasionally emits partial rows,
/// and those are skipped at append time rather than rejected wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReading {
    pub soil_moisture: Option<f64>,
    pub time: Option<String>,
    pub date: Option<String>,
}

impl RawReading {
    /// Promote to an [`Observation`] if all three fields are present.
    pub fn into_observation(self) -> Option<Observation> {
        Some(Observation {
            soil_moisture: self.soil_moisture?,
            time: self.time?,
            date: self.date?,
        })
    }
}

/// A complete soil-moisture reading as stored.
///
/// `time` and `date` stay in their raw string form (e.g. "02:15 PM",
/// "05-06-2024"); the combined timestamp is derived fresh each cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub time: String,
    pub date: String,
    pub soil_moisture: f64,
}

/// A per-cycle derived row: the regression feature and its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Whole seconds since the Unix epoch of the parsed date+time.
    pub time_numeric: i64,
    pub soil_moisture: f64,
}

/// Qualitative soil condition derived from a forecast value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Dry,
    SlightlyWet,
    Wet,
}

impl Condition {
    /// Bucket a predicted moisture percentage.
    ///
    /// Boundaries are inclusive on the Slightly Wet side: exactly 20
    /// and exactly 50 both classify as Slightly Wet.
    pub fn from_moisture(value: f64) -> Self {
        if value < 20.0 {
            Condition::Dry
        } else if value <= 50.0 {
            Condition::SlightlyWet
        } else {
            Condition::Wet
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Condition::Dry => "Dry",
            Condition::SlightlyWet => "Slightly Wet",
            Condition::Wet => "Wet",
        };
        write!(f, "{}", label)
    }
}
