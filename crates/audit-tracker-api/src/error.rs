use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[source] audit_tracker_db::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            ApiError::Database(e) => {
                tracing::error!("Request failed on storage: {}", e);
                "Internal server error".to_string()
            }
            ApiError::NotFound(message) => {
                tracing::warn!("{}", message);
                message.clone()
            }
            ApiError::BadRequest(message) => message.clone(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<audit_tracker_db::Error> for ApiError {
    fn from(err: audit_tracker_db::Error) -> Self {
        match err {
            audit_tracker_db::Error::AuditNotFound(_) => {
                ApiError::NotFound("Audit Not found".to_string())
            }
            audit_tracker_db::Error::CapaNotFound(_) => {
                ApiError::NotFound("CAPA Not found".to_string())
            }
            audit_tracker_db::Error::Constraint(message) => ApiError::BadRequest(message),
            other => ApiError::Database(other),
        }
    }
}

impl From<audit_tracker_core::Error> for ApiError {
    fn from(err: audit_tracker_core::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// `Json` extractor whose rejections use the JSON error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Path` extractor whose rejections use the JSON error body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
