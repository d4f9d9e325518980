//! Rank assignment over an already-ordered result list.

use super::models::GameResult;
use super::types::LeaderboardEntry;

/// Assigns dense 1-based ranks by list position.
///
/// The input must already be sorted descending by composite score (the
/// repository's `query_top` contract); this function trusts that order and
/// never re-sorts. Exact score ties therefore resolve to "first seen wins",
/// with no secondary key.
pub fn rank(ordered: Vec<GameResult>) -> Vec<LeaderboardEntry> {
    ordered
        .into_iter()
        .enumerate()
        .map(|(position, result)| LeaderboardEntry {
            rank: position as u32 + 1,
            display_name: result.display_name,
            net_wpm: result.net_wpm,
            accuracy: result.accuracy,
            composite_score: result.composite_score,
            recorded_at: result.recorded_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

    fn stored(display_name: &str, composite_score: f64) -> GameResult {
        GameResult {
            id: format!("game-{display_name}"),
            owner_id: "anonymous".to_string(),
            display_name: display_name.to_string(),
            net_wpm: composite_score,
            gross_wpm: composite_score,
            accuracy: 100.0,
            composite_score,
            problem_keys: HashMap::new(),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn assigns_ranks_by_position() {
        let entries = rank(vec![stored("user1", 100.0), stored("user2", 95.0)]);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].display_name, "user1");
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[1].display_name, "user2");
    }

    #[test]
    fn ties_still_get_distinct_ranks() {
        let entries = rank(vec![
            stored("first", 80.0),
            stored("second", 80.0),
            stored("third", 80.0),
        ]);

        let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        // Order of tied entries is preserved as given
        assert_eq!(entries[0].display_name, "first");
        assert_eq!(entries[2].display_name, "third");
    }

    #[test]
    fn empty_input_gives_empty_leaderboard() {
        assert!(rank(Vec::new()).is_empty());
    }
}
