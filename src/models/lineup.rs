//! Resolved lineup model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Position, Round};

/// Placeholder shown in place of a player name before kickoff.
pub const HIDDEN_PLAYER: &str = "Hidden";

/// One scored slot of a resolved lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionScore {
    /// Picked player, or `None` when the slot was left blank.
    pub player: Option<String>,

    /// Points scored by the pick (0.0 when blank or unknown).
    pub points: f64,
}

impl PositionScore {
    /// An unfilled slot.
    pub fn empty() -> Self {
        Self {
            player: None,
            points: 0.0,
        }
    }
}

/// The authoritative, fully-scored expansion of one submission.
///
/// Always carries exactly the six fixed positions; unfilled slots are
/// empty with zero points. Recomputed per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLineup {
    /// Display identity of the submitting user.
    pub identity: String,

    /// Round this lineup applies to.
    pub round: Round,

    /// Scored slot per position.
    pub positions: BTreeMap<Position, PositionScore>,
}

impl ResolvedLineup {
    /// An all-empty lineup for a user with no resolvable submission.
    pub fn empty(identity: impl Into<String>, round: Round) -> Self {
        let positions = Position::ALL
            .iter()
            .map(|&pos| (pos, PositionScore::empty()))
            .collect();
        Self {
            identity: identity.into(),
            round,
            positions,
        }
    }

    /// Sum of all six position points.
    pub fn round_total(&self) -> f64 {
        self.positions.values().map(|p| p.points).sum()
    }

    /// Copy of this lineup with player names replaced by a placeholder.
    /// Point values stay visible.
    pub fn redacted(&self) -> Self {
        let positions = self
            .positions
            .iter()
            .map(|(&pos, score)| {
                let player = score.player.as_ref().map(|_| HIDDEN_PLAYER.to_string());
                (
                    pos,
                    PositionScore {
                        player,
                        points: score.points,
                    },
                )
            })
            .collect();
        Self {
            identity: self.identity.clone(),
            round: self.round,
            positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lineup_has_all_positions() {
        let lineup = ResolvedLineup::empty("Alice", Round::Wildcard);

        assert_eq!(lineup.positions.len(), 6);
        assert_eq!(lineup.round_total(), 0.0);
        for score in lineup.positions.values() {
            assert!(score.player.is_none());
            assert_eq!(score.points, 0.0);
        }
    }

    #[test]
    fn test_round_total_sums_positions() {
        let mut lineup = ResolvedLineup::empty("Alice", Round::Wildcard);
        lineup.positions.insert(
            Position::Qb,
            PositionScore {
                player: Some("Josh Allen".to_string()),
                points: 24.3,
            },
        );
        lineup.positions.insert(
            Position::Te,
            PositionScore {
                player: Some("Travis Kelce".to_string()),
                points: 11.2,
            },
        );

        assert!((lineup.round_total() - 35.5).abs() < 1e-9);
    }

    #[test]
    fn test_redacted_masks_players_keeps_points() {
        let mut lineup = ResolvedLineup::empty("Alice", Round::Wildcard);
        lineup.positions.insert(
            Position::Qb,
            PositionScore {
                player: Some("Josh Allen".to_string()),
                points: 24.3,
            },
        );

        let masked = lineup.redacted();

        assert_eq!(
            masked.positions[&Position::Qb].player.as_deref(),
            Some(HIDDEN_PLAYER)
        );
        assert_eq!(masked.positions[&Position::Qb].points, 24.3);
        // Empty slots stay empty rather than showing a placeholder.
        assert!(masked.positions[&Position::Rb1].player.is_none());
        assert_eq!(masked.round_total(), lineup.round_total());
    }
}
