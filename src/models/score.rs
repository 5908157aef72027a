//! Player scoring model.

use serde::{Deserialize, Serialize};

use super::Round;

/// One player's fantasy points for one round, as published by the
/// scores feed. Multiple records may exist for the same player/round;
/// lookup takes the first match encountered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerScoreRecord {
    /// Player name as stored in the feed (may carry drift suffixes).
    pub player_name: String,

    /// Round the points were scored in.
    pub round: Round,

    /// Fantasy points. Unparsable feed values are coerced to 0.0 at ingest.
    pub fantasy_points: f64,
}

impl PlayerScoreRecord {
    pub fn new(player_name: impl Into<String>, round: Round, fantasy_points: f64) -> Self {
        Self {
            player_name: player_name.into(),
            round,
            fantasy_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_record_serialization() {
        let record = PlayerScoreRecord::new("Josh Allen", Round::Wildcard, 24.3);

        let json = serde_json::to_string(&record).unwrap();
        let parsed: PlayerScoreRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.player_name, "Josh Allen");
        assert_eq!(parsed.round, Round::Wildcard);
        assert!((parsed.fantasy_points - 24.3).abs() < f64::EPSILON);
    }
}
