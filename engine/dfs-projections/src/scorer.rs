use crate::categories::{DOUBLE_DIGIT_CATEGORIES, SCORING_WEIGHTS};
use crate::models::{BonusTier, PlayerGame, PlayerGameProjection};
use crate::CATEGORY_COUNT;
use rayon::prelude::*;
use tracing::debug;

/// A category reaching this value counts toward the bonus
pub const DOUBLE_DIGIT_THRESHOLD: f64 = 10.0;

/// Added when two or more bonus categories reach double digits
pub const DOUBLE_DOUBLE_BONUS: f64 = 1.5;

/// Added on top of the double-double bonus at three or more
pub const TRIPLE_DOUBLE_BONUS: f64 = 3.0;

/// Turns assembled player-games into fantasy point projections
#[derive(Debug, Clone, Copy, Default)]
pub struct FantasyScorer;

impl FantasyScorer {
    pub fn new() -> Self {
        Self
    }

    /// Weighted sum over all categories, missing ones counting as 0
    pub fn weighted_points(&self, game: &PlayerGame) -> f64 {
        SCORING_WEIGHTS
            .iter()
            .map(|(category, weight)| game.stat_or_zero(*category) * weight)
            .sum()
    }

    /// Number of bonus categories at or above the double-digit threshold
    pub fn double_digit_count(&self, game: &PlayerGame) -> usize {
        DOUBLE_DIGIT_CATEGORIES
            .iter()
            .filter(|category| game.stat_or_zero(**category) >= DOUBLE_DIGIT_THRESHOLD)
            .count()
    }

    pub fn bonus_tier(&self, game: &PlayerGame) -> BonusTier {
        match self.double_digit_count(game) {
            0 | 1 => BonusTier::None,
            2 => BonusTier::DoubleDouble,
            _ => BonusTier::TripleDouble,
        }
    }

    /// Score a single player-game. Never fails.
    pub fn score(&self, game: &PlayerGame) -> PlayerGameProjection {
        let bonus = self.bonus_tier(game);
        let fantasy_points = self.weighted_points(game) + bonus.points();
        let available_props = game.stats.len();
        let projection_confidence = confidence(available_props);

        debug!(
            "Scored {} (game {}): {:.2} fpts, bonus {:?}, {}/{} props",
            game.description, game.game_id, fantasy_points, bonus, available_props, CATEGORY_COUNT
        );

        PlayerGameProjection {
            description: game.description.clone(),
            game_id: game.game_id.clone(),
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
            bookmaker: game.bookmaker.clone(),
            stats: game.stats.clone(),
            fantasy_points,
            bonus,
            available_props,
            projection_confidence,
        }
    }

    /// Score every player-game in parallel, keeping input order
    pub fn score_all(&self, games: &[PlayerGame]) -> Vec<PlayerGameProjection> {
        games.par_iter().map(|game| self.score(game)).collect()
    }
}

impl BonusTier {
    /// Additive fantasy points for this tier (0, 1.5 or 4.5)
    pub fn points(self) -> f64 {
        match self {
            BonusTier::None => 0.0,
            BonusTier::DoubleDouble => DOUBLE_DOUBLE_BONUS,
            BonusTier::TripleDouble => DOUBLE_DOUBLE_BONUS + TRIPLE_DOUBLE_BONUS,
        }
    }
}

/// Share of the tracked categories observed, as a percentage
pub fn confidence(available_props: usize) -> f64 {
    available_props as f64 / CATEGORY_COUNT as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::StatCategory;
    use std::collections::BTreeMap;

    fn game(stats: &[(StatCategory, f64)]) -> PlayerGame {
        PlayerGame {
            description: "A. Player".to_string(),
            game_id: "1".to_string(),
            home_team: "BOS".to_string(),
            away_team: "NYK".to_string(),
            bookmaker: "draftkings".to_string(),
            stats: stats.iter().copied().collect::<BTreeMap<_, _>>(),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_points_and_rebounds_double_double() {
        let scorer = FantasyScorer::new();
        let projection =
            scorer.score(&game(&[(StatCategory::Points, 25.0), (StatCategory::Rebounds, 12.0)]));

        assert!(approx(projection.fantasy_points, 41.5));
        assert_eq!(projection.bonus, BonusTier::DoubleDouble);
        assert_eq!(projection.available_props, 2);
        assert!(approx(projection.projection_confidence, 200.0 / 7.0));
    }

    #[test]
    fn test_full_stat_line_weights() {
        let scorer = FantasyScorer::new();
        let g = game(&[
            (StatCategory::Points, 8.0),
            (StatCategory::Rebounds, 4.0),
            (StatCategory::Assists, 2.0),
            (StatCategory::ThreePointersMade, 2.0),
            (StatCategory::Steals, 1.0),
            (StatCategory::Blocks, 1.0),
            (StatCategory::Turnovers, 2.0),
        ]);

        // 8 + 5 + 3 + 1 + 2 + 2 - 1
        assert!(approx(scorer.weighted_points(&g), 20.0));
        let projection = scorer.score(&g);
        assert!(approx(projection.fantasy_points, 20.0));
        assert_eq!(projection.available_props, 7);
        assert!(approx(projection.projection_confidence, 100.0));
    }

    #[test]
    fn test_bonus_boundaries() {
        let scorer = FantasyScorer::new();

        let none = game(&[(StatCategory::Points, 30.0), (StatCategory::Rebounds, 9.5)]);
        assert_eq!(scorer.bonus_tier(&none), BonusTier::None);
        assert!(approx(scorer.score(&none).fantasy_points, scorer.weighted_points(&none)));

        let double = game(&[(StatCategory::Points, 10.0), (StatCategory::Assists, 10.0)]);
        assert_eq!(scorer.bonus_tier(&double), BonusTier::DoubleDouble);
        assert!(approx(scorer.score(&double).fantasy_points, scorer.weighted_points(&double) + 1.5));

        let triple = game(&[
            (StatCategory::Points, 22.5),
            (StatCategory::Rebounds, 10.5),
            (StatCategory::Assists, 10.0),
        ]);
        assert_eq!(scorer.bonus_tier(&triple), BonusTier::TripleDouble);
        assert!(approx(scorer.score(&triple).fantasy_points, scorer.weighted_points(&triple) + 4.5));

        let five = game(&[
            (StatCategory::Points, 10.0),
            (StatCategory::Rebounds, 10.0),
            (StatCategory::Assists, 10.0),
            (StatCategory::Steals, 10.0),
            (StatCategory::Blocks, 10.0),
        ]);
        assert_eq!(scorer.double_digit_count(&five), 5);
        assert!(approx(scorer.score(&five).fantasy_points, scorer.weighted_points(&five) + 4.5));
    }

    #[test]
    fn test_threes_and_turnovers_never_count_toward_bonus() {
        let scorer = FantasyScorer::new();
        let g = game(&[
            (StatCategory::Points, 12.0),
            (StatCategory::ThreePointersMade, 11.0),
            (StatCategory::Turnovers, 10.0),
        ]);
        assert_eq!(scorer.double_digit_count(&g), 1);
        assert_eq!(scorer.bonus_tier(&g), BonusTier::None);
    }

    #[test]
    fn test_zero_valued_stat_still_counts_as_available() {
        let scorer = FantasyScorer::new();
        let projection = scorer.score(&game(&[(StatCategory::Blocks, 0.0)]));
        assert_eq!(projection.available_props, 1);
        assert!(approx(projection.fantasy_points, 0.0));
    }

    #[test]
    fn test_empty_stats() {
        let projection = FantasyScorer::new().score(&game(&[]));
        assert_eq!(projection.available_props, 0);
        assert_eq!(projection.projection_confidence, 0.0);
        assert_eq!(projection.fantasy_points, 0.0);
    }

    #[test]
    fn test_score_all_keeps_order() {
        let scorer = FantasyScorer::new();
        let games: Vec<PlayerGame> = (0..64)
            .map(|i| {
                let mut g = game(&[(StatCategory::Points, i as f64)]);
                g.description = format!("Player {i}");
                g
            })
            .collect();

        let projections = scorer.score_all(&games);

        assert_eq!(projections.len(), 64);
        for (i, projection) in projections.iter().enumerate() {
            assert_eq!(projection.description, format!("Player {i}"));
        }
    }
}
