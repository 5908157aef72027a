//! Kickoff schedule and lineup visibility.
//!
//! Lineup contents stay hidden from other competitors until the round's
//! games kick off; owners always see their own picks. Point values are
//! never hidden.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::Round;

use super::normalize::normalize_name;

/// Kickoff times per round. Rounds without an entry never start.
#[derive(Debug, Clone, Default)]
pub struct KickoffSchedule {
    kickoffs: BTreeMap<Round, DateTime<Utc>>,
}

impl KickoffSchedule {
    /// An empty schedule (nothing ever starts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kickoff time for a round.
    pub fn with_kickoff(mut self, round: Round, at: DateTime<Utc>) -> Self {
        self.kickoffs.insert(round, at);
        self
    }

    /// The configured kickoff time for a round, if any.
    pub fn kickoff(&self, round: Round) -> Option<DateTime<Utc>> {
        self.kickoffs.get(&round).copied()
    }

    /// Whether games have started for a round at the given instant.
    /// False when the round has no configured kickoff.
    pub fn has_started(&self, round: Round, now: DateTime<Utc>) -> bool {
        match self.kickoffs.get(&round) {
            Some(kickoff) => now >= *kickoff,
            None => false,
        }
    }

    /// The round to surface by default: the most recently started round,
    /// or the first round before the competition begins.
    pub fn default_round(&self, now: DateTime<Utc>) -> Round {
        Round::ALL
            .iter()
            .copied()
            .filter(|&round| self.has_started(round, now))
            .last()
            .unwrap_or_else(Round::first)
    }

    /// Whether a viewer may see lineup player names for a round.
    ///
    /// Owners (matched by normalized identity) always may; everyone else
    /// waits for kickoff.
    pub fn can_view_lineup(
        &self,
        round: Round,
        now: DateTime<Utc>,
        viewer: Option<&str>,
        owner: &str,
    ) -> bool {
        if let Some(viewer) = viewer {
            if normalize_name(viewer) == normalize_name(owner) {
                return true;
            }
        }
        self.has_started(round, now)
    }
}
