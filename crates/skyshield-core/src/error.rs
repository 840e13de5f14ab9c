//! Error type for the few fallible boundaries (config loading, dimension input).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid play-field dimensions {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
