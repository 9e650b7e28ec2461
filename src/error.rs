//! Error types for the monitor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
