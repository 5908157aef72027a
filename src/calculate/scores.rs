//! Player score lookup.

use crate::models::{PlayerScoreRecord, Round};

use super::matching::filter_two_tier;
use super::normalize::normalize_name;

/// Lookup view over a snapshot of the scores feed.
///
/// Lookups never fail: a player with no matching record scores 0.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoreIndex<'a> {
    records: &'a [PlayerScoreRecord],
}

impl<'a> ScoreIndex<'a> {
    /// Create an index over a scores snapshot.
    pub fn new(records: &'a [PlayerScoreRecord]) -> Self {
        Self { records }
    }

    /// Fantasy points for a player in a round.
    ///
    /// Tries an exact name match first, then a normalized match, and
    /// takes the first record found. Returns 0.0 when neither matches.
    pub fn lookup(&self, player_name: &str, round: Round) -> f64 {
        if player_name.is_empty() {
            return 0.0;
        }

        let normalized = normalize_name(player_name);
        let matches = filter_two_tier(
            self.records,
            |r| r.round == round && r.player_name == player_name,
            |r| r.round == round && normalize_name(&r.player_name) == normalized,
        );

        matches.first().map(|r| r.fantasy_points).unwrap_or(0.0)
    }
}
