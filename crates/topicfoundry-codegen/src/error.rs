//! Errors from the output sinks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown SQL target '{0}' (expected postgres, bigquery, or clickhouse)")]
    UnknownDialect(String),
}
