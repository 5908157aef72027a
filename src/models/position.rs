//! Lineup position model.

use serde::{Deserialize, Serialize};

/// A slot in a submitted lineup. Every lineup has exactly these six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Qb,
    #[serde(rename = "RB1")]
    Rb1,
    #[serde(rename = "RB2")]
    Rb2,
    #[serde(rename = "WR1")]
    Wr1,
    #[serde(rename = "WR2")]
    Wr2,
    #[serde(rename = "TE")]
    Te,
}

impl Position {
    /// All positions in lineup display order.
    pub const ALL: [Position; 6] = [
        Position::Qb,
        Position::Rb1,
        Position::Rb2,
        Position::Wr1,
        Position::Wr2,
        Position::Te,
    ];

    /// The sheet column header for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb1 => "RB1",
            Position::Rb2 => "RB2",
            Position::Wr1 => "WR1",
            Position::Wr2 => "WR2",
            Position::Te => "TE",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
