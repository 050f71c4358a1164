//! Error types for the projections runner

use crate::source::SourceError;
use thiserror::Error;

/// Errors surfaced outside the pure projection path
#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
