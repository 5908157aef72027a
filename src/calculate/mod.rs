//! Scoring engine.
//!
//! Pure functions over immutable snapshots of the two sheet feeds:
//! - Name normalization and two-tier (exact-then-normalized) matching
//! - Submission resolution (latest wins)
//! - Player score lookup and lineup scoring
//! - Roster derivation, totals aggregation, and ranking
//! - Kickoff gating for lineup visibility
//!
//! Nothing here performs I/O or mutates its inputs; every result is
//! recomputed from scratch against the latest snapshot.

pub mod leaderboard;
pub mod lineup;
pub mod matching;
pub mod normalize;
pub mod resolve;
pub mod roster;
pub mod schedule;
pub mod scores;

pub use leaderboard::{build_leaderboard, user_totals};
pub use lineup::score_lineup;
pub use normalize::normalize_name;
pub use resolve::resolve_submission;
pub use roster::roster;
pub use schedule::KickoffSchedule;
pub use scores::ScoreIndex;
