use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    models::{GameResult, NewGameResult},
    ranker,
    repository::ScoreRepository,
    scoring,
    types::{LeaderboardEntry, ScoreSubmitRequest},
};
use crate::{identity::CallerIdentity, shared::AppError};

/// Largest leaderboard page a caller may request
pub const MAX_LEADERBOARD_SIZE: i64 = 100;

/// Service for handling score submission and ranking business logic
pub struct ScoreService {
    repository: Arc<dyn ScoreRepository + Send + Sync>,
}

impl ScoreService {
    pub fn new(repository: Arc<dyn ScoreRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Validates, scores and persists one submitted game result.
    ///
    /// Attribution always comes from the resolved caller identity; the
    /// request body cannot spoof it. On validation failure nothing is
    /// written. On success the store performs exactly one append and the
    /// persisted record (with assigned id and timestamp) is returned.
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        request: ScoreSubmitRequest,
        identity: &CallerIdentity,
    ) -> Result<GameResult, AppError> {
        let mut record = NewGameResult {
            owner_id: identity.owner_id.clone(),
            display_name: identity.display_name.clone(),
            net_wpm: request.net_wpm,
            gross_wpm: request.gross_wpm,
            accuracy: request.accuracy,
            composite_score: 0.0,
            problem_keys: request.problem_keys,
        };

        scoring::validate(&record)?;

        record.composite_score = scoring::composite_score(record.net_wpm, record.accuracy);
        debug!(
            owner_id = %record.owner_id,
            composite_score = record.composite_score,
            "Submission validated and scored"
        );

        let stored = self.repository.append(&record).await?;

        info!(
            game_id = %stored.id,
            owner_id = %stored.owner_id,
            net_wpm = stored.net_wpm,
            "Game result persisted"
        );

        Ok(stored)
    }

    /// Every stored result for one owner. No results is an empty vec, not
    /// an error; ordering is left to the caller.
    #[instrument(skip(self))]
    pub async fn user_stats(&self, owner_id: &str) -> Result<Vec<GameResult>, AppError> {
        if owner_id.is_empty() {
            return Err(AppError::invalid_metric("ownerId", "(empty)"));
        }

        let results = self.repository.query_by_owner(owner_id).await?;
        debug!(owner_id = %owner_id, count = results.len(), "Fetched user stats");
        Ok(results)
    }

    /// Top results ranked for display. Returns fewer than `top` entries
    /// when fewer results exist.
    #[instrument(skip(self))]
    pub async fn leaderboard(&self, top: i64) -> Result<Vec<LeaderboardEntry>, AppError> {
        if !(1..=MAX_LEADERBOARD_SIZE).contains(&top) {
            return Err(AppError::invalid_metric("top", top));
        }

        let ordered = self.repository.query_top(top as usize).await?;
        debug!(requested = top, returned = ordered.len(), "Fetched leaderboard results");
        Ok(ranker::rank(ordered))
    }
}
