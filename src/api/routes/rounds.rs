use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::state::AppState;
use crate::models::Round;

#[derive(Debug, Serialize)]
pub struct RoundInfo {
    pub name: String,
    pub started: bool,
    pub kickoff: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct RoundsResponse {
    pub rounds: Vec<RoundInfo>,
    pub default_round: String,
}

/// The fixed round sequence with kickoff state, and the round the UI
/// should surface by default.
pub async fn rounds(State(state): State<AppState>) -> Json<RoundsResponse> {
    let now = Utc::now();

    let rounds = Round::ALL
        .iter()
        .map(|&round| RoundInfo {
            name: round.as_str().to_string(),
            started: state.schedule.has_started(round, now),
            kickoff: state.schedule.kickoff(round),
        })
        .collect();

    Json(RoundsResponse {
        rounds,
        default_round: state.schedule.default_round(now).as_str().to_string(),
    })
}
