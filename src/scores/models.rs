use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One completed typing-test attempt, as persisted.
///
/// Immutable once stored: there is no update or delete path anywhere in the
/// service. `composite_score` is always derived server-side; `id` and
/// `recorded_at` are assigned by the repository at append time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub id: String,
    pub owner_id: String,
    pub display_name: String,
    pub net_wpm: f64,
    pub gross_wpm: f64,
    pub accuracy: f64,
    pub composite_score: f64,
    /// Per-key miscount diagnostics, opaque to ranking
    pub problem_keys: HashMap<String, u32>,
    pub recorded_at: DateTime<Utc>,
}

/// A validated, scored attempt waiting for the repository to assign its
/// id and timestamp.
#[derive(Debug, Clone)]
pub struct NewGameResult {
    pub owner_id: String,
    pub display_name: String,
    pub net_wpm: f64,
    pub gross_wpm: f64,
    pub accuracy: f64,
    pub composite_score: f64,
    pub problem_keys: HashMap<String, u32>,
}
