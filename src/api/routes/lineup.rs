use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{normalize_name, resolve_submission, roster, score_lineup, ScoreIndex};
use crate::ingest;
use crate::models::{Position, PositionScore, Round};

#[derive(Debug, Deserialize)]
pub struct LineupParams {
    /// The competitor whose lineup is requested.
    pub user: String,

    /// Round name, e.g. "Wildcard".
    pub round: String,

    /// Identity of the requesting viewer, if signed in.
    pub viewer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LineupResponse {
    pub identity: String,
    pub round: String,
    /// Whether player names are disclosed to this viewer.
    pub visible: bool,
    pub round_total: f64,
    pub positions: BTreeMap<Position, PositionScore>,
}

/// A competitor's resolved lineup for one round, with visibility gating
/// applied for the requesting viewer.
pub async fn lineup(
    State(state): State<AppState>,
    Query(params): Query<LineupParams>,
) -> Result<Json<LineupResponse>, ApiError> {
    let round = Round::parse(&params.round)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown round: {:?}", params.round)))?;

    let picks_rows = state.source.picks().await?;
    let scores_rows = state.source.scores().await?;

    let submissions = ingest::parse_picks(&picks_rows);
    let scores = ingest::parse_scores(&scores_rows);

    // Resolve the requested user against the roster so drifted variants
    // land on the same competitor.
    let wanted = normalize_name(&params.user);
    let identity = roster(&submissions)
        .into_iter()
        .find(|candidate| normalize_name(candidate) == wanted)
        .ok_or_else(|| ApiError::NotFound(format!("No picks found for user {:?}", params.user)))?;

    let index = ScoreIndex::new(&scores);
    let resolved = resolve_submission(&submissions, &identity, round);
    let lineup = score_lineup(resolved, &identity, round, &index);

    let visible =
        state
            .schedule
            .can_view_lineup(round, Utc::now(), params.viewer.as_deref(), &identity);
    let gated = if visible { lineup.clone() } else { lineup.redacted() };

    Ok(Json(LineupResponse {
        identity: gated.identity,
        round: round.as_str().to_string(),
        visible,
        round_total: lineup.round_total(),
        positions: gated.positions,
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::calculate::KickoffSchedule;
    use crate::fetch::StaticSource;
    use crate::models::{Round, HIDDEN_PLAYER};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn sample_state(schedule: KickoffSchedule) -> AppState {
        let picks = vec![json!({
            "User Name": "Alice - paid",
            "Week": "Wildcard",
            "Timestamp": "2026-01-09T10:00:00Z",
            "QB": "Josh Allen",
        })];
        let scores = vec![
            json!({"playerName": "Josh Allen", "gameWeek": "Wildcard", "fantasyPoints": 24.3}),
        ];

        AppState {
            source: Arc::new(StaticSource::new(picks, scores)),
            schedule: Arc::new(schedule),
        }
    }

    fn started_schedule() -> KickoffSchedule {
        KickoffSchedule::new().with_kickoff(Round::Wildcard, Utc::now() - Duration::hours(3))
    }

    fn locked_schedule() -> KickoffSchedule {
        KickoffSchedule::new().with_kickoff(Round::Wildcard, Utc::now() + Duration::hours(3))
    }

    #[tokio::test]
    async fn test_lineup_after_kickoff_is_visible() {
        let app = build_router(sample_state(started_schedule()));

        let (status, json) = get_json(app, "/api/lineup?user=Alice&round=Wildcard").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["identity"], "Alice - paid");
        assert_eq!(json["visible"], true);
        assert_eq!(json["positions"]["QB"]["player"], "Josh Allen");
        assert_eq!(json["positions"]["QB"]["points"], 24.3);
        assert_eq!(json["round_total"], 24.3);
    }

    #[tokio::test]
    async fn test_lineup_before_kickoff_is_masked() {
        let app = build_router(sample_state(locked_schedule()));

        let (status, json) = get_json(app, "/api/lineup?user=Alice&round=Wildcard&viewer=Bob").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["visible"], false);
        assert_eq!(json["positions"]["QB"]["player"], HIDDEN_PLAYER);
        // Points stay visible even while names are masked.
        assert_eq!(json["positions"]["QB"]["points"], 24.3);
        assert_eq!(json["round_total"], 24.3);
    }

    #[tokio::test]
    async fn test_owner_sees_own_lineup_before_kickoff() {
        let app = build_router(sample_state(locked_schedule()));

        let (status, json) =
            get_json(app, "/api/lineup?user=Alice&round=Wildcard&viewer=Alice").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["visible"], true);
        assert_eq!(json["positions"]["QB"]["player"], "Josh Allen");
    }

    #[tokio::test]
    async fn test_unknown_round_is_bad_request() {
        let app = build_router(sample_state(started_schedule()));

        let (status, json) = get_json(app, "/api/lineup?user=Alice&round=Preseason").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let app = build_router(sample_state(started_schedule()));

        let (status, json) = get_json(app, "/api/lineup?user=Mallory&round=Wildcard").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_user_without_submission_gets_empty_lineup() {
        // Alice has a Wildcard submission but nothing for the Conference
        // round; the lineup is all empty slots rather than an error.
        let app = build_router(sample_state(started_schedule()));

        let (status, json) = get_json(app, "/api/lineup?user=Alice&round=Conference").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["round_total"], 0.0);
        assert!(json["positions"]["QB"]["player"].is_null());
    }
}
