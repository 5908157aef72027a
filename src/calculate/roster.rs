//! Competitor roster derivation.

use std::collections::HashMap;

use crate::models::PickSubmission;

use super::normalize::normalize_name;

/// Derive the distinct set of competing identities from raw submissions.
///
/// Raw user names are grouped by their normalized form; each group is
/// represented by its longest raw variant (ties keep the first seen).
/// The returned order is insertion order over the grouping pass — the
/// leaderboard re-sorts, so roster order is not observable downstream.
pub fn roster(submissions: &[PickSubmission]) -> Vec<String> {
    let mut display: Vec<String> = Vec::new();
    let mut by_normalized: HashMap<String, usize> = HashMap::new();

    for submission in submissions {
        let raw = submission.user_name.trim();
        if raw.is_empty() {
            continue;
        }

        let normalized = normalize_name(raw);
        match by_normalized.get(&normalized) {
            Some(&idx) => {
                if raw.len() > display[idx].len() {
                    display[idx] = raw.to_string();
                }
            }
            None => {
                by_normalized.insert(normalized, display.len());
                display.push(raw.to_string());
            }
        }
    }

    display
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Round;

    #[test]
    fn test_distinct_users() {
        let submissions = vec![
            PickSubmission::new("Alice", Round::Wildcard),
            PickSubmission::new("Bob", Round::Wildcard),
            PickSubmission::new("Alice", Round::Divisional),
        ];

        assert_eq!(roster(&submissions), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_variants_merge_to_longest() {
        let submissions = vec![
            PickSubmission::new("Alice", Round::Wildcard),
            PickSubmission::new("Alice - note", Round::Divisional),
            PickSubmission::new("Bob", Round::Wildcard),
        ];

        assert_eq!(roster(&submissions), vec!["Alice - note", "Bob"]);
    }

    #[test]
    fn test_longest_wins_regardless_of_order() {
        let submissions = vec![
            PickSubmission::new("Alice - note", Round::Wildcard),
            PickSubmission::new("Alice", Round::Divisional),
        ];

        assert_eq!(roster(&submissions), vec!["Alice - note"]);
    }

    #[test]
    fn test_equal_length_keeps_first_seen() {
        let submissions = vec![
            PickSubmission::new("Bob - x", Round::Wildcard),
            PickSubmission::new("Bob - y", Round::Divisional),
        ];

        assert_eq!(roster(&submissions), vec!["Bob - x"]);
    }

    #[test]
    fn test_blank_names_skipped() {
        let submissions = vec![
            PickSubmission::new("", Round::Wildcard),
            PickSubmission::new("   ", Round::Wildcard),
            PickSubmission::new("Alice", Round::Wildcard),
        ];

        assert_eq!(roster(&submissions), vec!["Alice"]);
    }

    #[test]
    fn test_empty_snapshot() {
        assert!(roster(&[]).is_empty());
    }
}
