use crate::categories::normalize;
use crate::models::{PlayerGame, PlayerGameKey, RawPropLine};
use std::collections::HashMap;
use tracing::debug;

/// Groups prop lines into one record per (player, game)
///
/// Descriptive fields (teams, bookmaker) come from the first line seen for a
/// player-game and are never updated. Stat values are overwritten by every
/// later line for the same category. Player-games keep first-seen order.
pub struct PlayerGameAggregator {
    /// Player-games in first-seen order
    games: Vec<PlayerGame>,

    /// Map from identity to position in `games`
    index: HashMap<PlayerGameKey, usize>,

    /// Lines whose market is not one of the tracked categories
    unknown_market_rows: usize,
}

impl PlayerGameAggregator {
    pub fn new() -> Self {
        Self { games: Vec::new(), index: HashMap::new(), unknown_market_rows: 0 }
    }

    /// Group a whole batch of lines in input order
    pub fn aggregate<'a, I>(lines: I) -> Vec<PlayerGame>
    where
        I: IntoIterator<Item = &'a RawPropLine>,
    {
        let mut aggregator = Self::new();
        for line in lines {
            aggregator.push(line);
        }
        aggregator.into_games()
    }

    /// Merge one line into its player-game, creating it on first sight
    pub fn push(&mut self, line: &RawPropLine) {
        let key = line.key();
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.games.len();
                self.games.push(PlayerGame::from_line(line));
                self.index.insert(key, slot);
                slot
            }
        };

        let Some(category) = normalize(&line.market) else {
            self.unknown_market_rows += 1;
            debug!("Ignoring market '{}' for {}", line.market, line.description);
            return;
        };

        let value = line.point.filter(|p| !p.is_nan()).unwrap_or(0.0);
        self.games[slot].stats.insert(category, value);
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn unknown_market_rows(&self) -> usize {
        self.unknown_market_rows
    }

    pub fn games(&self) -> &[PlayerGame] {
        &self.games
    }

    pub fn into_games(self) -> Vec<PlayerGame> {
        self.games
    }
}

impl Default for PlayerGameAggregator {
    fn default() -> Self {
        Self::new()
    }
}
