//! Canonical stat categories and the market lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven box-score categories a projection is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatCategory {
    #[serde(rename = "PTS")]
    Points,
    #[serde(rename = "TRB")]
    Rebounds,
    #[serde(rename = "AST")]
    Assists,
    #[serde(rename = "3P")]
    ThreePointersMade,
    #[serde(rename = "STL")]
    Steals,
    #[serde(rename = "BLK")]
    Blocks,
    #[serde(rename = "TOV")]
    Turnovers,
}

/// Sportsbook market identifier -> category. Anything not listed is ignored.
const MARKET_TABLE: [(&str, StatCategory); 7] = [
    ("player_points", StatCategory::Points),
    ("player_rebounds", StatCategory::Rebounds),
    ("player_assists", StatCategory::Assists),
    ("player_threes", StatCategory::ThreePointersMade),
    ("player_steals", StatCategory::Steals),
    ("player_blocks", StatCategory::Blocks),
    ("player_turnovers", StatCategory::Turnovers),
];

/// Fantasy points per unit of each category
pub const SCORING_WEIGHTS: [(StatCategory, f64); 7] = [
    (StatCategory::Points, 1.0),
    (StatCategory::ThreePointersMade, 0.5),
    (StatCategory::Rebounds, 1.25),
    (StatCategory::Assists, 1.5),
    (StatCategory::Steals, 2.0),
    (StatCategory::Blocks, 2.0),
    (StatCategory::Turnovers, -0.5),
];

/// Categories that count toward double-double / triple-double bonuses
pub const DOUBLE_DIGIT_CATEGORIES: [StatCategory; 5] = [
    StatCategory::Points,
    StatCategory::Rebounds,
    StatCategory::Assists,
    StatCategory::Steals,
    StatCategory::Blocks,
];

/// Map a raw market identifier onto its category.
///
/// Unknown, empty or differently-cased markets return `None`; the caller skips
/// the row's stat contribution.
pub fn normalize(market: &str) -> Option<StatCategory> {
    MARKET_TABLE.iter().find(|(name, _)| *name == market).map(|(_, category)| *category)
}

impl StatCategory {
    /// All categories in display order
    pub const ALL: [StatCategory; 7] = [
        StatCategory::Points,
        StatCategory::Rebounds,
        StatCategory::Assists,
        StatCategory::ThreePointersMade,
        StatCategory::Steals,
        StatCategory::Blocks,
        StatCategory::Turnovers,
    ];

    /// Short box-score code (e.g. "PTS", "3P")
    pub fn code(self) -> &'static str {
        match self {
            StatCategory::Points => "PTS",
            StatCategory::Rebounds => "TRB",
            StatCategory::Assists => "AST",
            StatCategory::ThreePointersMade => "3P",
            StatCategory::Steals => "STL",
            StatCategory::Blocks => "BLK",
            StatCategory::Turnovers => "TOV",
        }
    }

    /// Market identifier that feeds this category
    pub fn market(self) -> &'static str {
        MARKET_TABLE
            .iter()
            .find(|(_, category)| *category == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    /// Fantasy points per unit
    pub fn weight(self) -> f64 {
        SCORING_WEIGHTS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_markets_normalize() {
        assert_eq!(normalize("player_points"), Some(StatCategory::Points));
        assert_eq!(normalize("player_rebounds"), Some(StatCategory::Rebounds));
        assert_eq!(normalize("player_assists"), Some(StatCategory::Assists));
        assert_eq!(normalize("player_threes"), Some(StatCategory::ThreePointersMade));
        assert_eq!(normalize("player_steals"), Some(StatCategory::Steals));
        assert_eq!(normalize("player_blocks"), Some(StatCategory::Blocks));
        assert_eq!(normalize("player_turnovers"), Some(StatCategory::Turnovers));
    }

    #[test]
    fn test_unknown_markets_are_ignored() {
        assert_eq!(normalize("player_fouls"), None);
        assert_eq!(normalize("player_points_rebounds_assists"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("Player_Points"), None);
        assert_eq!(normalize(" player_points"), None);
    }

    #[test]
    fn test_every_category_has_one_market_and_weight() {
        for category in StatCategory::ALL {
            assert_eq!(normalize(category.market()), Some(category));
            assert_ne!(category.weight(), 0.0, "{category} has no weight");
        }
    }

    #[test]
    fn test_code_matches_serialized_name() {
        for category in StatCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.code()));
        }
    }

    #[test]
    fn test_weights() {
        assert_eq!(StatCategory::Points.weight(), 1.0);
        assert_eq!(StatCategory::ThreePointersMade.weight(), 0.5);
        assert_eq!(StatCategory::Rebounds.weight(), 1.25);
        assert_eq!(StatCategory::Assists.weight(), 1.5);
        assert_eq!(StatCategory::Steals.weight(), 2.0);
        assert_eq!(StatCategory::Blocks.weight(), 2.0);
        assert_eq!(StatCategory::Turnovers.weight(), -0.5);
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&StatCategory::ThreePointersMade).unwrap();
        assert_eq!(json, "\"3P\"");
        let parsed: StatCategory = serde_json::from_str("\"TOV\"").unwrap();
        assert_eq!(parsed, StatCategory::Turnovers);
    }
}
