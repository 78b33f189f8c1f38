use axum::response::IntoResponse;
use axum::Json;

use super::MessageResponse;

pub async fn health_check() -> impl IntoResponse {
    Json(MessageResponse::new("Audit Tracker API is Running"))
}
