//! Playoff round model.

use serde::{Deserialize, Serialize};

/// One stage of the playoff competition.
///
/// The sequence is fixed and ordered; `Ord` follows the order games are
/// played, which is also the order rounds appear in [`Round::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Round {
    Wildcard,
    Divisional,
    Conference,
    #[serde(rename = "Super Bowl")]
    SuperBowl,
}

impl Round {
    /// All rounds in play order.
    pub const ALL: [Round; 4] = [
        Round::Wildcard,
        Round::Divisional,
        Round::Conference,
        Round::SuperBowl,
    ];

    /// The sheet/display name for this round.
    pub fn as_str(&self) -> &'static str {
        match self {
            Round::Wildcard => "Wildcard",
            Round::Divisional => "Divisional",
            Round::Conference => "Conference",
            Round::SuperBowl => "Super Bowl",
        }
    }

    /// Parse a round from its sheet name. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Round> {
        match s.trim() {
            "Wildcard" => Some(Round::Wildcard),
            "Divisional" => Some(Round::Divisional),
            "Conference" => Some(Round::Conference),
            "Super Bowl" => Some(Round::SuperBowl),
            _ => None,
        }
    }

    /// The first round of the competition.
    pub fn first() -> Round {
        Round::ALL[0]
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
