use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keysprint::scores::repository::{
    InMemoryScoreRepository, PostgresScoreRepository, ScoreRepository,
};
use keysprint::shared::AppState;
use keysprint::text::WordBankTextSource;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keysprint=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting typing-speed game server");

    // Postgres when configured, in-memory otherwise
    let score_repository: Arc<dyn ScoreRepository + Send + Sync> =
        match std::env::var("DATABASE_URL") {
            Ok(database_url) => {
                let pool = sqlx::PgPool::connect(&database_url)
                    .await
                    .expect("Failed to connect to database");
                info!("Using PostgreSQL score repository");
                Arc::new(PostgresScoreRepository::new(pool))
            }
            Err(_) => {
                info!("DATABASE_URL not set, using in-memory score repository");
                Arc::new(InMemoryScoreRepository::new())
            }
        };

    let app_state = AppState::new(score_repository, Arc::new(WordBankTextSource::default()));

    let app = keysprint::app(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Server running on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}
