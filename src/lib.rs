// Library crate for the typing-speed game server
// This file exposes the public API for integration tests

pub mod identity;
pub mod scores;
pub mod shared;
pub mod text;

// Re-export commonly used types for easier access in tests
pub use identity::CallerIdentity;
pub use scores::repository::{InMemoryScoreRepository, ScoreRepository};
pub use scores::ScoreService;
pub use shared::{AppError, AppState};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the full application router over the given state.
/// Shared by main and the integration tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "keysprint is up" }))
        .route("/api/text", get(text::get_practice_text))
        .route("/api/scores", post(scores::submit_score))
        .route("/api/scores/leaderboard", get(scores::get_leaderboard))
        .route("/api/scores/me/stats", get(scores::get_my_stats))
        .layer(middleware::from_fn(identity::resolve_identity))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
