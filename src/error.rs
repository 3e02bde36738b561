//! Error type shared by the loaders, exporters and configuration

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown basis '{0}' (expected monthly or yearly)")]
    UnknownBasis(String),

    #[error("Invalid scenario row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
