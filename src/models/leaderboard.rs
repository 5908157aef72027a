//! Leaderboard models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Round;

/// A user's per-round and cumulative totals across the season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTotals {
    /// Display identity.
    pub identity: String,

    /// Round total per round, in play order.
    pub per_round: BTreeMap<Round, f64>,

    /// Arithmetic sum of all round totals.
    pub total: f64,
}

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based rank by descending season total.
    pub rank: u32,

    /// Display identity.
    pub identity: String,

    /// Round total per round, in play order.
    pub per_round: BTreeMap<Round, f64>,

    /// Season total.
    pub total: f64,
}

impl LeaderboardEntry {
    /// Build an entry from computed totals and an assigned rank.
    pub fn from_totals(rank: u32, totals: UserTotals) -> Self {
        Self {
            rank,
            identity: totals.identity,
            per_round: totals.per_round,
            total: totals.total,
        }
    }
}
