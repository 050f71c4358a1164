use crate::categories::StatCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One sportsbook prop line as delivered by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPropLine {
    /// Player display name (identity key together with `game_id`)
    pub description: String,

    /// Game the line belongs to. Sources emit it as a string or a number.
    #[serde(deserialize_with = "string_or_number")]
    pub game_id: String,

    #[serde(default)]
    pub home_team: String,

    #[serde(default)]
    pub away_team: String,

    /// Bookmaker offering the line (carried through, never scored)
    #[serde(default)]
    pub bookmaker: String,

    /// Market identifier, e.g. "player_points"
    #[serde(default)]
    pub market: String,

    /// Line threshold; absent or null on some rows
    #[serde(default)]
    pub point: Option<f64>,

    /// Direction label, "Over" or "Under"
    #[serde(default)]
    pub label: String,
}

/// Composite identity of a player in a game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerGameKey {
    pub description: String,
    pub game_id: String,
}

/// A player-game being assembled from its prop lines, not yet scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGame {
    pub description: String,
    pub game_id: String,
    pub home_team: String,
    pub away_team: String,
    pub bookmaker: String,

    /// Only categories seen in the input are present
    pub stats: BTreeMap<StatCategory, f64>,
}

/// Bonus awarded for double-digit production across categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusTier {
    None,
    DoubleDouble,
    TripleDouble,
}

/// Scored projection for one player in one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameProjection {
    pub description: String,
    pub game_id: String,
    pub home_team: String,
    pub away_team: String,
    pub bookmaker: String,
    pub stats: BTreeMap<StatCategory, f64>,
    pub fantasy_points: f64,
    pub bonus: BonusTier,
    /// Number of categories present in `stats` (0-7)
    pub available_props: usize,
    /// `available_props / 7 * 100`
    pub projection_confidence: f64,
}

/// Counters describing one engine run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub rows_received: usize,
    pub over_rows: usize,
    pub unknown_market_rows: usize,
    pub player_games: usize,
    pub double_doubles: usize,
    pub triple_doubles: usize,
}

/// Ranked projections plus run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub generated_at: DateTime<Utc>,
    pub summary: ProjectionSummary,
    pub projections: Vec<PlayerGameProjection>,
}

impl RawPropLine {
    /// Create a line with every descriptive field set
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        description: impl Into<String>,
        game_id: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        bookmaker: impl Into<String>,
        market: impl Into<String>,
        point: Option<f64>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            game_id: game_id.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            bookmaker: bookmaker.into(),
            market: market.into(),
            point,
            label: label.into(),
        }
    }

    pub fn key(&self) -> PlayerGameKey {
        PlayerGameKey { description: self.description.clone(), game_id: self.game_id.clone() }
    }

    pub fn is_over(&self) -> bool {
        self.label == crate::OVER_LABEL
    }
}

impl PlayerGame {
    /// Start a player-game from the first line seen for it
    pub fn from_line(line: &RawPropLine) -> Self {
        Self {
            description: line.description.clone(),
            game_id: line.game_id.clone(),
            home_team: line.home_team.clone(),
            away_team: line.away_team.clone(),
            bookmaker: line.bookmaker.clone(),
            stats: BTreeMap::new(),
        }
    }

    /// Value of a category, 0 when it was never observed
    pub fn stat_or_zero(&self, category: StatCategory) -> f64 {
        self.stats.get(&category).copied().unwrap_or(0.0)
    }
}

impl PlayerGameProjection {
    pub fn stat(&self, category: StatCategory) -> Option<f64> {
        self.stats.get(&category).copied()
    }

    /// "AWAY @ HOME" matchup label
    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }
}

impl ProjectionReport {
    /// The first `n` ranked projections
    pub fn top(&self, n: usize) -> &[PlayerGameProjection] {
        &self.projections[..n.min(self.projections.len())]
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Integer(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    })
}
