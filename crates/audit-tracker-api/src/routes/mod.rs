use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Health check
        .route("/", get(handlers::health::health_check))

        // Audit endpoints
        .route(
            "/audits",
            post(handlers::audit::create_audit).get(handlers::audit::list_audits),
        )
        .route(
            "/audits/:id",
            get(handlers::audit::get_audit)
                .put(handlers::audit::update_audit)
                .delete(handlers::audit::delete_audit),
        )

        // Finding endpoints
        .route("/findings", post(handlers::finding::create_finding))
        .route("/findings/:audit_id", get(handlers::finding::list_findings_for_audit))

        // CAPA endpoints. GET takes a finding id, PUT a CAPA id.
        .route("/capas", post(handlers::capa::create_capa))
        .route(
            "/capas/:id",
            get(handlers::capa::list_capas_for_finding).put(handlers::capa::update_capa),
        )

        // Add state
        .with_state(state)

        // Request logging and CORS
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
