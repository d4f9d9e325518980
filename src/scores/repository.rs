use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::models::{GameResult, NewGameResult};
use crate::shared::AppError;

/// Trait for the partitioned, append-only score store.
///
/// Records are keyed by owner; `append` assigns the id and timestamp and is
/// the only write path - stored results are never updated or deleted.
#[async_trait]
pub trait ScoreRepository {
    /// Persists one result, assigning its id and recorded-at timestamp
    async fn append(&self, record: &NewGameResult) -> Result<GameResult, AppError>;

    /// All results for one owner, in no guaranteed order
    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<GameResult>, AppError>;

    /// Top `n` results across all owners, descending by composite score
    async fn query_top(&self, n: usize) -> Result<Vec<GameResult>, AppError>;
}

/// In-memory implementation of ScoreRepository for development and testing
///
/// Keeps one append-only vec per owner partition. Data is lost on restart,
/// which is fine for the contexts this is used in.
pub struct InMemoryScoreRepository {
    partitions: Mutex<HashMap<String, Vec<GameResult>>>,
}

impl Default for InMemoryScoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self {
            partitions: Mutex::new(HashMap::new()),
        }
    }

    /// Total number of stored results across all owners
    pub fn result_count(&self) -> usize {
        self.partitions.lock().unwrap().values().map(Vec::len).sum()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    #[instrument(skip(self, record))]
    async fn append(&self, record: &NewGameResult) -> Result<GameResult, AppError> {
        let result = GameResult {
            id: Uuid::new_v4().to_string(),
            owner_id: record.owner_id.clone(),
            display_name: record.display_name.clone(),
            net_wpm: record.net_wpm,
            gross_wpm: record.gross_wpm,
            accuracy: record.accuracy,
            composite_score: record.composite_score,
            problem_keys: record.problem_keys.clone(),
            recorded_at: Utc::now(),
        };

        let mut partitions = self.partitions.lock().unwrap();
        partitions
            .entry(result.owner_id.clone())
            .or_default()
            .push(result.clone());

        debug!(game_id = %result.id, owner_id = %result.owner_id, "Result appended to memory");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<GameResult>, AppError> {
        let partitions = self.partitions.lock().unwrap();
        let results = partitions.get(owner_id).cloned().unwrap_or_default();
        debug!(owner_id = %owner_id, count = results.len(), "Fetched owner results from memory");
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn query_top(&self, n: usize) -> Result<Vec<GameResult>, AppError> {
        let partitions = self.partitions.lock().unwrap();
        let mut all: Vec<GameResult> = partitions.values().flatten().cloned().collect();
        // Stable sort: equal composite scores keep their scan order
        all.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
        all.truncate(n);
        Ok(all)
    }
}

/// PostgreSQL implementation of the score store
pub struct PostgresScoreRepository {
    pool: PgPool,
}

impl PostgresScoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn serialize_problem_keys(problem_keys: &HashMap<String, u32>) -> Result<String, AppError> {
    serde_json::to_string(problem_keys).map_err(|e| AppError::Storage(e.to_string()))
}

fn row_to_result(row: &sqlx::postgres::PgRow) -> GameResult {
    let problem_keys: String = row.get("problem_keys");
    GameResult {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        display_name: row.get("display_name"),
        net_wpm: row.get("net_wpm"),
        gross_wpm: row.get("gross_wpm"),
        accuracy: row.get("accuracy"),
        composite_score: row.get("composite_score"),
        problem_keys: serde_json::from_str(&problem_keys).unwrap_or_default(),
        recorded_at: row.get("recorded_at"),
    }
}

#[async_trait]
impl ScoreRepository for PostgresScoreRepository {
    #[instrument(skip(self, record))]
    async fn append(&self, record: &NewGameResult) -> Result<GameResult, AppError> {
        let id = Uuid::new_v4().to_string();
        let recorded_at = Utc::now();

        debug!(game_id = %id, owner_id = %record.owner_id, "Appending result to database");

        sqlx::query(
            "INSERT INTO game_results \
             (id, owner_id, display_name, net_wpm, gross_wpm, accuracy, composite_score, problem_keys, recorded_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&id)
        .bind(&record.owner_id)
        .bind(&record.display_name)
        .bind(record.net_wpm)
        .bind(record.gross_wpm)
        .bind(record.accuracy)
        .bind(record.composite_score)
        .bind(serialize_problem_keys(&record.problem_keys)?)
        .bind(recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to append result to database");
            AppError::Storage(e.to_string())
        })?;

        Ok(GameResult {
            id,
            owner_id: record.owner_id.clone(),
            display_name: record.display_name.clone(),
            net_wpm: record.net_wpm,
            gross_wpm: record.gross_wpm,
            accuracy: record.accuracy,
            composite_score: record.composite_score,
            problem_keys: record.problem_keys.clone(),
            recorded_at,
        })
    }

    #[instrument(skip(self))]
    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<GameResult>, AppError> {
        let rows = sqlx::query(
            "SELECT id, owner_id, display_name, net_wpm, gross_wpm, accuracy, composite_score, problem_keys, recorded_at \
             FROM game_results WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, owner_id = %owner_id, "Failed to fetch owner results from database");
            AppError::Storage(e.to_string())
        })?;

        Ok(rows.iter().map(row_to_result).collect())
    }

    #[instrument(skip(self))]
    async fn query_top(&self, n: usize) -> Result<Vec<GameResult>, AppError> {
        let rows = sqlx::query(
            "SELECT id, owner_id, display_name, net_wpm, gross_wpm, accuracy, composite_score, problem_keys, recorded_at \
             FROM game_results ORDER BY composite_score DESC LIMIT $1",
        )
        .bind(n as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to fetch top results from database");
            AppError::Storage(e.to_string())
        })?;

        Ok(rows.iter().map(row_to_result).collect())
    }
}
