//! Core data models for the playoff pool.

mod leaderboard;
mod lineup;
mod position;
mod round;
mod score;
mod submission;

pub use leaderboard::*;
pub use lineup::*;
pub use position::*;
pub use round::*;
pub use score::*;
pub use submission::*;
