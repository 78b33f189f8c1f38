use anyhow::Result;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audit_tracker_api::{create_router, ApiState};
use audit_tracker_db::Database;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "audit_tracker=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration
    let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("API_PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()?;
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://audit_tracker.db".to_string());

    // Initialize database
    let db = Database::new(&database_url).await?;
    db.init_schema().await?;
    tracing::info!("Using database {}", database_url);

    // Build router
    let app = create_router(ApiState::new(db));

    // Start server
    let addr = format!("{}:{}", host, port);
    tracing::info!("Audit Tracker API running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
