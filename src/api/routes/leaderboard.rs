use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::build_leaderboard;
use crate::ingest;
use crate::models::LeaderboardEntry;

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

/// The ranked leaderboard, recomputed from the latest snapshots.
pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let picks_rows = state.source.picks().await?;
    let scores_rows = state.source.scores().await?;

    let submissions = ingest::parse_picks(&picks_rows);
    let scores = ingest::parse_scores(&scores_rows);

    Ok(Json(LeaderboardResponse {
        entries: build_leaderboard(&submissions, &scores),
    }))
}
