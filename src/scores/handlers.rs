use axum::{
    extract::{Query, State},
    Extension, Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::GameResult,
    service::ScoreService,
    types::{LeaderboardEntry, LeaderboardQuery, ScoreSubmitRequest, ScoreSubmitResponse},
};
use crate::identity::CallerIdentity;
use crate::shared::{AppError, AppState};

const DEFAULT_LEADERBOARD_SIZE: i64 = 10;

/// HTTP handler for submitting a finished game
///
/// POST /api/scores
/// Returns the assigned game id and timestamp
#[instrument(name = "submit_score", skip(state, request))]
pub async fn submit_score(
    State(state): State<AppState>,
    Extension(identity): Extension<CallerIdentity>,
    Json(request): Json<ScoreSubmitRequest>,
) -> Result<Json<ScoreSubmitResponse>, AppError> {
    info!(
        display_name = %identity.display_name,
        net_wpm = request.net_wpm,
        "Received score submission"
    );

    let service = ScoreService::new(Arc::clone(&state.score_repository));
    let stored = service.submit(request, &identity).await?;

    Ok(Json(ScoreSubmitResponse {
        message: "Score recorded".to_string(),
        game_id: stored.id,
        timestamp: stored.recorded_at,
    }))
}

/// HTTP handler for the ranked leaderboard
///
/// GET /api/scores/leaderboard?top=N (default 10)
/// Returns array of ranked entries, best first
#[instrument(name = "get_leaderboard", skip(state))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let top = query.top.unwrap_or(DEFAULT_LEADERBOARD_SIZE);

    let service = ScoreService::new(Arc::clone(&state.score_repository));
    let entries = service.leaderboard(top).await?;

    info!(requested = top, returned = entries.len(), "Leaderboard served");

    Ok(Json(entries))
}

/// HTTP handler for the caller's own result history
///
/// GET /api/scores/me/stats
/// Returns array of every stored result for the caller's identity
#[instrument(name = "get_my_stats", skip(state))]
pub async fn get_my_stats(
    State(state): State<AppState>,
    Extension(identity): Extension<CallerIdentity>,
) -> Result<Json<Vec<GameResult>>, AppError> {
    let service = ScoreService::new(Arc::clone(&state.score_repository));
    let results = service.user_stats(&identity.owner_id).await?;

    info!(
        owner_id = %identity.owner_id,
        count = results.len(),
        "User stats served"
    );

    Ok(Json(results))
}
