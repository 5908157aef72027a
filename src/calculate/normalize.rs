//! Name normalization.
//!
//! Both feeds occasionally append administrative suffixes after the fact
//! (e.g. "Bob - Please pay ASAP"). Normalization strips everything from
//! the first `" - "` separator so drifted names still match.

/// Canonicalize a free-text name for matching.
///
/// Trims surrounding whitespace, then truncates at the first `" - "`
/// separator if one is present. Case-sensitive and idempotent.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    match trimmed.split_once(" - ") {
        Some((head, _)) => head.trim().to_string(),
        None => trimmed.to_string(),
    }
}
