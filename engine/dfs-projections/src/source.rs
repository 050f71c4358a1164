//! Where raw prop lines come from.
//!
//! Retrieval and decoding live outside the projection core; this module only
//! defines the seam and the two sources the binary and tests need.

use crate::models::RawPropLine;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors a prop line source can report
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Prop line source unavailable at {location}: {source}")]
    SourceUnavailable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed prop lines in {location}: {reason}")]
    MalformedInput { location: String, reason: String },
}

/// Anything that can hand the engine a batch of raw prop lines
pub trait PropLineSource {
    fn load(&self) -> Result<Vec<RawPropLine>, SourceError>;
}

/// Lines already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    lines: Vec<RawPropLine>,
}

impl InMemorySource {
    pub fn new(lines: Vec<RawPropLine>) -> Self {
        Self { lines }
    }
}

impl PropLineSource for InMemorySource {
    fn load(&self) -> Result<Vec<RawPropLine>, SourceError> {
        Ok(self.lines.clone())
    }
}

/// A JSON array of prop line objects on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Decode lines from an in-memory JSON document
    pub fn parse(location: &str, content: &str) -> Result<Vec<RawPropLine>, SourceError> {
        serde_json::from_str(content).map_err(|e| SourceError::MalformedInput {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }
}

impl PropLineSource for JsonFileSource {
    fn load(&self) -> Result<Vec<RawPropLine>, SourceError> {
        let location = self.path.display().to_string();
        info!("Loading prop lines from: {}", location);

        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            SourceError::SourceUnavailable { location: location.clone(), source }
        })?;
        let lines = Self::parse(&location, &content)?;

        if lines.is_empty() {
            warn!("No prop lines found in {}", location);
        } else {
            info!("Loaded {} prop lines", lines.len());
        }
        Ok(lines)
    }
}
