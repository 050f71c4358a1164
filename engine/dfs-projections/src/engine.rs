use chrono::Utc;
use tracing::{debug, info};

use crate::{
    aggregator::PlayerGameAggregator,
    models::{BonusTier, PlayerGameProjection, ProjectionReport, ProjectionSummary, RawPropLine},
    ranker,
    scorer::FantasyScorer,
    source::{PropLineSource, SourceError},
};

/// Runs the projection pipeline: Over filter, grouping, scoring, ranking.
///
/// Holds no state between runs; every call rebuilds its grouping table from
/// the lines it is given.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    scorer: FantasyScorer,
}

impl ProjectionEngine {
    pub fn new() -> Self {
        Self { scorer: FantasyScorer::new() }
    }

    /// Project a batch of raw lines. Lines not labelled "Over" are skipped.
    pub fn project(&self, lines: &[RawPropLine]) -> ProjectionReport {
        let mut aggregator = PlayerGameAggregator::new();
        let mut over_rows = 0;
        for line in lines.iter().filter(|line| line.is_over()) {
            aggregator.push(line);
            over_rows += 1;
        }
        debug!(
            "Kept {} of {} lines, {} player-games",
            over_rows,
            lines.len(),
            aggregator.len()
        );

        let unknown_market_rows = aggregator.unknown_market_rows();
        let games = aggregator.into_games();
        let projections = ranker::rank(self.scorer.score_all(&games));

        let summary = ProjectionSummary {
            rows_received: lines.len(),
            over_rows,
            unknown_market_rows,
            player_games: projections.len(),
            double_doubles: count_tier(&projections, BonusTier::DoubleDouble),
            triple_doubles: count_tier(&projections, BonusTier::TripleDouble),
        };

        info!(
            "Projected {} player-games from {} lines ({} Over, {} unknown market, {} double-doubles, {} triple-doubles)",
            summary.player_games,
            summary.rows_received,
            summary.over_rows,
            summary.unknown_market_rows,
            summary.double_doubles,
            summary.triple_doubles
        );

        ProjectionReport { generated_at: Utc::now(), summary, projections }
    }

    /// Load lines from a source and project them
    pub fn project_from<S: PropLineSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<ProjectionReport, SourceError> {
        let lines = source.load()?;
        Ok(self.project(&lines))
    }
}

/// Ranked projections for a batch of raw lines
pub fn project_players(lines: &[RawPropLine]) -> Vec<PlayerGameProjection> {
    ProjectionEngine::new().project(lines).projections
}

fn count_tier(projections: &[PlayerGameProjection], tier: BonusTier) -> usize {
    projections.iter().filter(|p| p.bonus == tier).count()
}
