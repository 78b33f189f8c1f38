use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use super::MessageResponse;
use crate::error::{ApiError, ApiJson, ApiPath};
use crate::state::ApiState;
use audit_tracker_core::{format_date, parse_date, AuditChanges, NewAudit};
use audit_tracker_db::AuditRecord;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAuditRequest {
    pub title: String,
    pub department: String,
    pub date: String,
    pub status: Option<String>,
}

/// Any subset of fields; absent keys keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateAuditRequest {
    pub title: Option<String>,
    pub department: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuditResponse {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub date: String,
    pub status: String,
}

impl From<AuditRecord> for AuditResponse {
    fn from(record: AuditRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            department: record.department,
            date: format_date(record.date),
            status: record.status,
        }
    }
}

/// Create an audit
pub async fn create_audit(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<CreateAuditRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let date = parse_date(&payload.date)?;
    let audit = NewAudit::new(payload.title, payload.department, date).with_status(payload.status);

    let record = state.db.create_audit(&audit).await?;
    tracing::info!("Created audit {} ({})", record.id, record.title);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Audit Successfully Created", record.id)),
    ))
}

/// List all audits
pub async fn list_audits(
    State(state): State<ApiState>,
) -> Result<Json<Vec<AuditResponse>>, ApiError> {
    let records = state.db.list_audits().await?;
    Ok(Json(records.into_iter().map(AuditResponse::from).collect()))
}

/// Get a single audit
pub async fn get_audit(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<AuditResponse>, ApiError> {
    let record = state.db.get_audit(id).await?;
    Ok(Json(record.into()))
}

/// Update the supplied fields of an audit
pub async fn update_audit(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateAuditRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    // An absent audit is reported before any problem with the body.
    state.db.get_audit(id).await?;

    let changes = AuditChanges {
        title: payload.title,
        department: payload.department,
        date: payload.date.as_deref().map(parse_date).transpose()?,
        status: payload.status,
    };

    state.db.update_audit(id, &changes).await?;
    tracing::info!("Updated audit {}", id);

    Ok(Json(MessageResponse::new("Audit Successfully Updated")))
}

/// Delete an audit. Its findings are left in place.
pub async fn delete_audit(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.db.delete_audit(id).await?;
    tracing::info!("Deleted audit {}", id);

    Ok(Json(MessageResponse::new("Audit Successfully Deleted")))
}
