use anyhow::Result;

use crate::cli::Commands;
use audit_tracker_api::{create_router, ApiState};
use audit_tracker_db::Database;

pub async fn execute(command: Commands, db: Database) -> Result<()> {
    match command {
        Commands::Serve { host, port } => {
            db.init_schema().await?;

            let app = create_router(ApiState::new(db));

            let addr = format!("{}:{}", host, port);
            tracing::info!("Audit Tracker API running on http://{}", addr);

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }

        Commands::InitDb => {
            db.init_schema().await?;
            println!("Database Initialized");
        }
    }

    Ok(())
}
