use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request payload for submitting a finished game.
///
/// Attribution fields (ownerId, displayName) are intentionally absent:
/// identity always comes from the resolved caller, so anything the client
/// puts in the body for them is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmitRequest {
    pub net_wpm: f64,
    pub gross_wpm: f64,
    pub accuracy: f64,
    #[serde(default)]
    pub problem_keys: HashMap<String, u32>,
}

/// Acknowledgement for an accepted score submission
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmitResponse {
    pub message: String,
    pub game_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Query string for the leaderboard endpoint
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub top: Option<i64>,
}

/// Read-side projection of a stored result with its assigned rank
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based, dense: assigned strictly by list position
    pub rank: u32,
    pub display_name: String,
    pub net_wpm: f64,
    pub accuracy: f64,
    pub composite_score: f64,
    pub recorded_at: DateTime<Utc>,
}
