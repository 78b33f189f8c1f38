use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use super::MessageResponse;
use crate::error::{ApiError, ApiJson, ApiPath};
use crate::state::ApiState;
use audit_tracker_core::NewFinding;
use audit_tracker_db::FindingRecord;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFindingRequest {
    pub audit_id: i64,
    pub description: String,
    pub severity: String,
    pub status: Option<String>,
}

/// Findings are listed per audit, so the audit id is not repeated.
#[derive(Debug, Serialize, Deserialize)]
pub struct FindingResponse {
    pub id: i64,
    pub description: String,
    pub severity: String,
    pub status: String,
}

impl From<FindingRecord> for FindingResponse {
    fn from(record: FindingRecord) -> Self {
        Self {
            id: record.id,
            description: record.description,
            severity: record.severity,
            status: record.status,
        }
    }
}

pub async fn create_finding(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<CreateFindingRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let finding = NewFinding::new(payload.audit_id, payload.description, payload.severity)
        .with_status(payload.status);

    let record = state.db.create_finding(&finding).await?;
    tracing::info!("Created finding {} for audit {}", record.id, record.audit_id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Finding Successfully Created", record.id)),
    ))
}

pub async fn list_findings_for_audit(
    State(state): State<ApiState>,
    ApiPath(audit_id): ApiPath<i64>,
) -> Result<Json<Vec<FindingResponse>>, ApiError> {
    let records = state.db.list_findings_for_audit(audit_id).await?;
    Ok(Json(records.into_iter().map(FindingResponse::from).collect()))
}
