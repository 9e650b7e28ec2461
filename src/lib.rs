//! Soil-Moisture Monitor
//!
//! Polls a remote endpoint for soil-moisture readings, accumulates them
//! in memory, fits a linear trend and logs a 10-minute-ahead forecast
//! with a qualitative condition label.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod monitor;
pub mod preprocess;
pub mod store;
pub mod types;
