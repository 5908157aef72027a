//! Lineup submission model.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Position, Round};

/// One user's lineup submission for one round.
///
/// A user may submit more than once for the same round; only the most
/// recent submission is authoritative (see `calculate::resolve`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickSubmission {
    /// Raw user name as stored in the sheet (may carry drift suffixes).
    pub user_name: String,

    /// Round the lineup was submitted for.
    pub round: Round,

    /// Submission time. `None` when the sheet cell was missing or
    /// unparsable; such rows are treated as least-recent.
    pub submitted_at: Option<DateTime<Utc>>,

    /// Picked player per position. Blank cells are absent entries.
    pub picks: BTreeMap<Position, String>,
}

impl PickSubmission {
    /// Create an empty submission for a user and round.
    pub fn new(user_name: impl Into<String>, round: Round) -> Self {
        Self {
            user_name: user_name.into(),
            round,
            submitted_at: None,
            picks: BTreeMap::new(),
        }
    }

    /// Builder method to set the submission timestamp.
    pub fn at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = Some(submitted_at);
        self
    }

    /// Builder method to add a pick.
    pub fn with_pick(mut self, position: Position, player: impl Into<String>) -> Self {
        self.picks.insert(position, player.into());
        self
    }

    /// The picked player for a position, if one was submitted.
    pub fn pick(&self, position: Position) -> Option<&str> {
        self.picks.get(&position).map(String::as_str)
    }
}
