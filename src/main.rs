use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use task_api::config;
use task_api::router;
use task_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "task_api=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::settings();

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&settings.database_url)
        .await?;

    task_api::MIGRATOR.run(&pool).await?;

    let state = AppState { db: pool };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    info!("listening on http://{}", settings.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
