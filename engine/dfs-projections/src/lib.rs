//! DFS Projections
//!
//! Builds per-player, per-game fantasy basketball projections from sportsbook
//! prop lines. Only "Over" lines contribute: each recognized market becomes one
//! stat on the player-game, stats are weighted into fantasy points (with
//! double-double and triple-double bonuses) and the result is ranked.

pub mod aggregator;
pub mod categories;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod ranker;
pub mod scorer;
pub mod source;


pub use aggregator::PlayerGameAggregator;
pub use categories::{normalize, StatCategory};
pub use config::ProjectionConfig;
pub use engine::{project_players, ProjectionEngine};
pub use error::ProjectionError;
pub use models::*;
pub use scorer::FantasyScorer;
pub use source::{InMemorySource, JsonFileSource, PropLineSource, SourceError};

/// Direction label of the lines that feed projections
pub const OVER_LABEL: &str = "Over";

/// Number of canonical stat categories tracked per player-game
pub const CATEGORY_COUNT: usize = 7;

/// Default number of projections shown by the report
pub const DEFAULT_TOP_N: usize = 50;
