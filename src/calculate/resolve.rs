//! Submission resolution.
//!
//! Users may correct a lineup before lock, so the same user/round pair can
//! appear several times in the picks snapshot. Only the latest submission
//! scores.

use crate::models::{PickSubmission, Round};

use super::matching::filter_two_tier;
use super::normalize::normalize_name;

/// Resolve the authoritative submission for a user and round.
///
/// Matches exactly on the stored user name first, falling back to a
/// normalized match whenever the exact filter finds nothing (the stored
/// name may be the one that drifted). Among candidates, the most recent
/// timestamp wins; rows without a parsable timestamp sort after all
/// timestamped rows, keeping their original relative order.
pub fn resolve_submission<'a>(
    submissions: &'a [PickSubmission],
    identity: &str,
    round: Round,
) -> Option<&'a PickSubmission> {
    let normalized = normalize_name(identity);
    let mut candidates = filter_two_tier(
        submissions,
        |s| s.round == round && s.user_name == identity,
        |s| s.round == round && normalize_name(&s.user_name) == normalized,
    );

    // `None` orders before `Some`, so a descending stable sort puts
    // timestamped rows first (latest leading) and untimestamped rows last.
    candidates.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    candidates.first().copied()
}
