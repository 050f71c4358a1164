use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::DEFAULT_TOP_N;

/// Config file read when no other path is given
pub const DEFAULT_CONFIG_FILE: &str = "dfs-projections.toml";

/// Configuration for the projections runner
///
/// Scoring itself is not configurable; these settings only cover where lines
/// come from, how much of the ranking is printed and how logs look.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Prop line input
    pub source: SourceConfig,

    /// Report output
    pub report: ReportConfig,

    /// Logging output
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// JSON file holding the prop lines
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of ranked projections to print
    pub top_n: usize,

    /// Output format for the report
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset (e.g. "info", "dfs_projections=debug")
    pub level: String,

    /// "plain", "pretty" or "json"
    pub format: String,
}

/// How the ranked report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("data/props.json") }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N, format: OutputFormat::Table }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "plain".to_string() }
    }
}

impl ProjectionConfig {
    /// Load configuration in layers: defaults, then the given file (optional),
    /// then `DFS_*` environment variables (`DFS_REPORT__TOP_N=25`, etc.)
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let builder = Config::builder()
            .set_default("source.path", defaults.source.path.display().to_string())?
            .set_default("report.top_n", defaults.report.top_n as i64)?
            .set_default("report.format", "table")?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .add_source(File::from(path.as_ref().to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("DFS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Apply command-line overrides on top of the loaded layers
    pub fn apply_overrides(
        &mut self,
        input: Option<PathBuf>,
        top: Option<usize>,
        format: Option<OutputFormat>,
    ) {
        if let Some(input) = input {
            self.source.path = input;
        }
        if let Some(top) = top {
            self.report.top_n = top;
        }
        if let Some(format) = format {
            self.report.format = format;
        }
    }
}
