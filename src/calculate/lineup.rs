//! Lineup scoring.

use crate::models::{PickSubmission, Position, PositionScore, ResolvedLineup, Round};

use super::scores::ScoreIndex;

/// Expand a resolved submission into a fully-scored lineup.
///
/// Every one of the six positions is present in the result; blank picks
/// (and a missing submission) score as empty slots with 0.0 points.
pub fn score_lineup(
    submission: Option<&PickSubmission>,
    identity: &str,
    round: Round,
    scores: &ScoreIndex,
) -> ResolvedLineup {
    let mut lineup = ResolvedLineup::empty(identity, round);

    let Some(submission) = submission else {
        return lineup;
    };

    for &position in Position::ALL.iter() {
        let player = submission
            .pick(position)
            .map(str::trim)
            .filter(|p| !p.is_empty());

        if let Some(player) = player {
            lineup.positions.insert(
                position,
                PositionScore {
                    player: Some(player.to_string()),
                    points: scores.lookup(player, round),
                },
            );
        }
    }

    lineup
}
