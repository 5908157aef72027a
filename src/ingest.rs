//! Snapshot ingestion.
//!
//! Turns raw sheet rows (JSON objects keyed by column header) into typed
//! models. The sheets are maintained by hand, so parsing degrades rather
//! than fails: rows without a usable user name or round are skipped,
//! unparsable timestamps become `None`, and unparsable points become 0.0.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::models::{PickSubmission, PlayerScoreRecord, Position, Round};

/// Timestamp formats seen in the picks sheet besides RFC 3339.
const SHEET_TIMESTAMP_FORMATS: [&str; 2] = ["%m/%d/%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Read a cell as trimmed text. Numeric cells are rendered as text;
/// anything else (null, missing, nested) is absent.
fn cell_text(row: &Value, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a cell as fantasy points, coercing anything unparsable to 0.0.
fn cell_points(row: &Value, column: &str) -> f64 {
    match row.get(column) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Parse a sheet timestamp. Tries RFC 3339 first, then the formats the
/// sheet UI emits (taken as UTC; only relative order matters downstream).
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in SHEET_TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

/// Parse the picks worksheet into submissions.
///
/// A row needs a non-blank `User Name` and a recognizable `Week`;
/// everything else is optional.
pub fn parse_picks(rows: &[Value]) -> Vec<PickSubmission> {
    let mut submissions = Vec::new();

    for row in rows {
        let Some(user_name) = cell_text(row, "User Name") else {
            debug!("Skipping picks row without a user name");
            continue;
        };
        let round = cell_text(row, "Week").and_then(|week| Round::parse(&week));
        let Some(round) = round else {
            debug!(user = %user_name, "Skipping picks row with unknown week");
            continue;
        };

        let mut submission = PickSubmission::new(user_name, round);
        submission.submitted_at = cell_text(row, "Timestamp").and_then(|t| parse_timestamp(&t));

        for &position in Position::ALL.iter() {
            if let Some(player) = cell_text(row, position.as_str()) {
                submission.picks.insert(position, player);
            }
        }

        submissions.push(submission);
    }

    submissions
}

/// Parse the scores worksheet into score records.
///
/// A row needs a non-blank `playerName` and a recognizable `gameWeek`;
/// unparsable `fantasyPoints` coerce to 0.0.
pub fn parse_scores(rows: &[Value]) -> Vec<PlayerScoreRecord> {
    let mut records = Vec::new();

    for row in rows {
        let Some(player_name) = cell_text(row, "playerName") else {
            debug!("Skipping scores row without a player name");
            continue;
        };
        let round = cell_text(row, "gameWeek").and_then(|week| Round::parse(&week));
        let Some(round) = round else {
            debug!(player = %player_name, "Skipping scores row with unknown game week");
            continue;
        };

        records.push(PlayerScoreRecord::new(
            player_name,
            round,
            cell_points(row, "fantasyPoints"),
        ));
    }

    records
}
