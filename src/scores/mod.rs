// Public API - what other modules can use
pub use handlers::{get_leaderboard, get_my_stats, submit_score};
pub use service::{ScoreService, MAX_LEADERBOARD_SIZE};

// Internal modules
mod handlers;
pub mod models;
pub mod ranker;
pub mod repository;
pub mod scoring;
mod service;
pub mod types;
