//! End-to-end tests for the score API: submit, leaderboard, stats.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt; // for `oneshot`

use keysprint::scores::types::{LeaderboardEntry, ScoreSubmitResponse};
use keysprint::scores::models::GameResult;
use keysprint::text::WordBankTextSource;
use keysprint::{AppState, InMemoryScoreRepository};

fn test_app() -> (Router, Arc<InMemoryScoreRepository>) {
    let repo = Arc::new(InMemoryScoreRepository::new());
    let state = AppState::new(repo.clone(), Arc::new(WordBankTextSource::default()));
    (keysprint::app(state), repo)
}

fn submit_request(net_wpm: f64, accuracy: f64, player_name: Option<&str>) -> Request<Body> {
    let body = format!(
        r#"{{"netWpm": {net_wpm}, "grossWpm": {}, "accuracy": {accuracy}, "problemKeys": {{"t": 1}}}}"#,
        net_wpm + 8.0
    );
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/scores")
        .header("content-type", "application/json");
    if let Some(name) = player_name {
        builder = builder.header("X-Player-Name", name);
    }
    builder.body(Body::from(body)).unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn submit_then_read_back_stats() {
    let (app, repo) = test_app();

    let response = app
        .clone()
        .oneshot(submit_request(60.0, 95.0, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let ack: ScoreSubmitResponse = json_body(response).await;
    assert!(!ack.game_id.is_empty());
    assert_eq!(repo.result_count(), 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/scores/me/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stats: Vec<GameResult> = json_body(response).await;
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].id, ack.game_id);
    assert_eq!(stats[0].owner_id, "anonymous");
    assert_eq!(stats[0].net_wpm, 60.0);
    // Server-derived: 60 wpm at 95% accuracy
    assert_eq!(stats[0].composite_score, 57.0);
    assert_eq!(stats[0].problem_keys.get("t"), Some(&1));
}

#[tokio::test]
async fn leaderboard_ranks_best_first() {
    let (app, _repo) = test_app();

    for (net_wpm, accuracy, name) in [
        (100.0, 100.0, "user1"),
        (95.0, 100.0, "user2"),
        (40.0, 80.0, "user3"),
    ] {
        let response = app
            .clone()
            .oneshot(submit_request(net_wpm, accuracy, Some(name)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/scores/leaderboard?top=5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let entries: Vec<LeaderboardEntry> = json_body(response).await;
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[0].display_name, "user1");
    assert_eq!(entries[1].rank, 2);
    assert_eq!(entries[1].display_name, "user2");
    assert_eq!(entries[2].rank, 3);
    assert_eq!(entries[2].display_name, "user3");
}

#[tokio::test]
async fn invalid_submission_is_rejected_without_writes() {
    let (app, repo) = test_app();

    let response = app
        .oneshot(submit_request(301.0, 95.0, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: serde_json::Value = json_body(response).await;
    assert_eq!(error["field"], "netWpm");
    assert_eq!(repo.result_count(), 0);
}

#[tokio::test]
async fn leaderboard_top_out_of_range_is_rejected() {
    let (app, _repo) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/scores/leaderboard?top=101")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn practice_text_is_served() {
    let (app, _repo) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/text")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = json_body(response).await;
    assert!(!body["text"].as_str().unwrap().is_empty());
}
