//! Shared exact-then-normalized matching.
//!
//! Score lookup and submission resolution both need the same two-tier
//! strategy: try an exact filter first, and only if it finds nothing fall
//! back to a normalized filter. Exact match goes first to avoid accidental
//! cross-matches when two distinct names normalize to the same prefix.

/// Filter `records`, preferring exact matches.
///
/// Returns every record matching `exact`, in input order. If none match,
/// returns every record matching `normalized` instead. An empty result
/// means neither tier matched.
pub fn filter_two_tier<'a, T>(
    records: &'a [T],
    exact: impl Fn(&T) -> bool,
    normalized: impl Fn(&T) -> bool,
) -> Vec<&'a T> {
    let exact_matches: Vec<&T> = records.iter().filter(|r| exact(r)).collect();
    if !exact_matches.is_empty() {
        return exact_matches;
    }
    records.iter().filter(|r| normalized(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_tier_wins() {
        let records = vec!["Bob", "Bob - note", "Alice"];
        let found = filter_two_tier(&records, |r| *r == "Bob", |r| r.starts_with("Bob"));
        assert_eq!(found, vec![&"Bob"]);
    }

    #[test]
    fn test_falls_back_to_normalized() {
        let records = vec!["Bob - note", "Alice"];
        let found = filter_two_tier(&records, |r| *r == "Bob", |r| r.starts_with("Bob"));
        assert_eq!(found, vec![&"Bob - note"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = vec!["Alice"];
        let found = filter_two_tier(&records, |r| *r == "Bob", |r| r.starts_with("Bob"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let records = vec!["Bob - a", "Alice", "Bob - b"];
        let found = filter_two_tier(&records, |r| *r == "Bob", |r| r.starts_with("Bob"));
        assert_eq!(found, vec![&"Bob - a", &"Bob - b"]);
    }
}
