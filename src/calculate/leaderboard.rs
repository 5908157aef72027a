//! Totals aggregation and ranking.

use std::collections::BTreeMap;

use crate::models::{LeaderboardEntry, PickSubmission, PlayerScoreRecord, Round, UserTotals};

use super::lineup::score_lineup;
use super::resolve::resolve_submission;
use super::scores::ScoreIndex;

/// A user's round-by-round and cumulative totals.
///
/// Resolves and scores the user's lineup for every round in play order
/// and sums the results. Rounds with no submission contribute 0.0.
pub fn user_totals(
    submissions: &[PickSubmission],
    scores: &ScoreIndex,
    identity: &str,
) -> UserTotals {
    let mut per_round = BTreeMap::new();
    let mut total = 0.0;

    for &round in Round::ALL.iter() {
        let resolved = resolve_submission(submissions, identity, round);
        let lineup = score_lineup(resolved, identity, round, scores);
        let round_total = lineup.round_total();
        per_round.insert(round, round_total);
        total += round_total;
    }

    UserTotals {
        identity: identity.to_string(),
        per_round,
        total,
    }
}

/// Build the ranked leaderboard from the two snapshots.
///
/// Computes the roster, aggregates every identity's season totals, and
/// stable-sorts descending by total. Equal totals keep roster order (no
/// documented tie-break). Rank is the 1-based sorted position. Lineup
/// visibility is not applied here; callers gate it when rendering a
/// specific round's lineup.
pub fn build_leaderboard(
    submissions: &[PickSubmission],
    scores: &[PlayerScoreRecord],
) -> Vec<LeaderboardEntry> {
    let index = ScoreIndex::new(scores);

    let mut totals: Vec<UserTotals> = super::roster::roster(submissions)
        .iter()
        .map(|identity| user_totals(submissions, &index, identity))
        .collect();

    totals.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    totals
        .into_iter()
        .enumerate()
        .map(|(i, t)| LeaderboardEntry::from_totals(i as u32 + 1, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use chrono::{TimeZone, Utc};

    fn at(day: u32, hour: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, day, hour, 0, 0).unwrap()
    }

    fn sample_submissions() -> Vec<PickSubmission> {
        vec![
            PickSubmission::new("Alice", Round::Wildcard)
                .at(at(8, 10))
                .with_pick(Position::Qb, "Josh Allen")
                .with_pick(Position::Te, "Travis Kelce"),
            PickSubmission::new("Alice", Round::Divisional)
                .at(at(15, 10))
                .with_pick(Position::Qb, "Josh Allen"),
            PickSubmission::new("Bob", Round::Wildcard)
                .at(at(8, 11))
                .with_pick(Position::Qb, "Patrick Mahomes"),
        ]
    }

    fn sample_scores() -> Vec<PlayerScoreRecord> {
        vec![
            PlayerScoreRecord::new("Josh Allen", Round::Wildcard, 24.3),
            PlayerScoreRecord::new("Josh Allen", Round::Divisional, 18.7),
            PlayerScoreRecord::new("Travis Kelce", Round::Wildcard, 11.2),
            PlayerScoreRecord::new("Patrick Mahomes", Round::Wildcard, 20.1),
        ]
    }

    #[test]
    fn test_user_totals_sum_law() {
        let submissions = sample_submissions();
        let scores = sample_scores();
        let index = ScoreIndex::new(&scores);

        let totals = user_totals(&submissions, &index, "Alice");

        // Per-round totals match the resolved lineups' sums.
        for &round in Round::ALL.iter() {
            let resolved = resolve_submission(&submissions, "Alice", round);
            let lineup = score_lineup(resolved, "Alice", round, &index);
            assert_eq!(totals.per_round[&round], lineup.round_total());
        }

        assert!((totals.total - (24.3 + 11.2 + 18.7)).abs() < 1e-9);
        assert_eq!(totals.per_round[&Round::Conference], 0.0);
        assert_eq!(totals.per_round.len(), Round::ALL.len());
    }

    #[test]
    fn test_leaderboard_rank_order() {
        let entries = build_leaderboard(&sample_submissions(), &sample_scores());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].identity, "Alice");
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].identity, "Bob");
        assert_eq!(entries[1].rank, 2);

        for pair in entries.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_leaderboard_deterministic() {
        let submissions = sample_submissions();
        let scores = sample_scores();

        let first = build_leaderboard(&submissions, &scores);
        let second = build_leaderboard(&submissions, &scores);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.identity, b.identity);
            assert_eq!(a.rank, b.rank);
            assert_eq!(a.total, b.total);
        }
    }

    #[test]
    fn test_leaderboard_empty_snapshots() {
        assert!(build_leaderboard(&[], &[]).is_empty());
    }

    #[test]
    fn test_drifted_identity_end_to_end() {
        // Bob submits at t1, then corrects the pick at t2 after the sheet
        // annotated the stored name. The later pick must score, and the
        // longest raw variant is the display identity.
        let submissions = vec![
            PickSubmission::new("Bob", Round::Wildcard)
                .at(at(8, 10))
                .with_pick(Position::Qb, "Patrick Mahomes"),
            PickSubmission::new("Bob - Please pay ASAP", Round::Wildcard)
                .at(at(9, 10))
                .with_pick(Position::Qb, "Josh Allen"),
        ];
        let scores = vec![PlayerScoreRecord::new("Josh Allen", Round::Wildcard, 24.3)];

        let entries = build_leaderboard(&submissions, &scores);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].identity, "Bob - Please pay ASAP");
        assert!((entries[0].per_round[&Round::Wildcard] - 24.3).abs() < 1e-9);
        assert!((entries[0].total - 24.3).abs() < 1e-9);
    }

    #[test]
    fn test_merged_variants_single_entry() {
        // Two raw names normalize to the same identity; totals merge.
        let submissions = vec![
            PickSubmission::new("Alice", Round::Wildcard)
                .at(at(8, 10))
                .with_pick(Position::Qb, "Josh Allen"),
            PickSubmission::new("Alice - note", Round::Divisional)
                .at(at(15, 10))
                .with_pick(Position::Qb, "Josh Allen"),
        ];
        let scores = vec![
            PlayerScoreRecord::new("Josh Allen", Round::Wildcard, 24.3),
            PlayerScoreRecord::new("Josh Allen", Round::Divisional, 18.7),
        ];

        let entries = build_leaderboard(&submissions, &scores);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].identity, "Alice - note");
        assert!((entries[0].total - 43.0).abs() < 1e-9);
    }
}
