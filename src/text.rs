use async_trait::async_trait;
use axum::{extract::State, Json};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::shared::AppState;

const DEFAULT_WORD_COUNT: usize = 30;

// Common English words, roughly frequency-ordered
const WORD_BANK: &[&str] = &[
    "the", "of", "and", "to", "in", "is", "you", "that", "it", "he", "was", "for", "on", "are",
    "with", "as", "his", "they", "be", "at", "one", "have", "this", "from", "or", "had", "by",
    "hot", "word", "but", "what", "some", "we", "can", "out", "other", "were", "all", "there",
    "when", "up", "use", "your", "how", "said", "an", "each", "she", "which", "do", "their",
    "time", "if", "will", "way", "about", "many", "then", "them", "write", "would", "like", "so",
    "these", "her", "long", "make", "thing", "see", "him", "two", "has", "look", "more", "day",
    "could", "go", "come", "did", "number", "sound", "no", "most", "people", "my", "over", "know",
    "water", "than", "call", "first", "who", "may", "down", "side", "been", "now", "find",
];

/// Trait for producing practice text for a typing run
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn practice_text(&self) -> String;
}

/// Word-bank sampling text source
pub struct WordBankTextSource {
    word_count: usize,
}

impl WordBankTextSource {
    pub fn new(word_count: usize) -> Self {
        Self { word_count }
    }
}

impl Default for WordBankTextSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_COUNT)
    }
}

#[async_trait]
impl TextSource for WordBankTextSource {
    async fn practice_text(&self) -> String {
        let mut rng = rand::rng();
        let words: Vec<&str> = (0..self.word_count)
            .filter_map(|_| WORD_BANK.choose(&mut rng).copied())
            .collect();
        words.join(" ")
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PracticeTextResponse {
    pub text: String,
}

/// HTTP handler for fetching a fresh practice text
///
/// GET /api/text
#[instrument(name = "get_practice_text", skip(state))]
pub async fn get_practice_text(State(state): State<AppState>) -> Json<PracticeTextResponse> {
    let text = state.text_source.practice_text().await;
    Json(PracticeTextResponse { text })
}
