use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use super::MessageResponse;
use crate::error::{ApiError, ApiJson, ApiPath};
use crate::state::ApiState;
use audit_tracker_core::{format_date, parse_date, CapaChanges, NewCapa};
use audit_tracker_db::CapaRecord;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCapaRequest {
    pub finding_id: i64,
    pub action: String,
    pub assignee: String,
    pub due_date: String,
    pub status: Option<String>,
}

/// Status is not updatable; a `status` key in the body is ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateCapaRequest {
    pub action: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CapaResponse {
    pub id: i64,
    pub action: String,
    pub assignee: String,
    pub due_date: String,
    pub status: String,
}

impl From<CapaRecord> for CapaResponse {
    fn from(record: CapaRecord) -> Self {
        Self {
            id: record.id,
            action: record.action,
            assignee: record.assignee,
            due_date: format_date(record.due_date),
            status: record.status,
        }
    }
}

pub async fn create_capa(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<CreateCapaRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let due_date = parse_date(&payload.due_date)?;
    let capa = NewCapa::new(payload.finding_id, payload.action, payload.assignee, due_date)
        .with_status(payload.status);

    let record = state.db.create_capa(&capa).await?;
    tracing::info!("Created CAPA {} for finding {}", record.id, record.finding_id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("CAPA Successfully Created", record.id)),
    ))
}

pub async fn update_capa(
    State(state): State<ApiState>,
    ApiPath(capa_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateCapaRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    // An absent CAPA is reported before any problem with the body.
    state.db.get_capa(capa_id).await?;

    let changes = CapaChanges {
        action: payload.action,
        assignee: payload.assignee,
        due_date: payload.due_date.as_deref().map(parse_date).transpose()?,
    };

    state.db.update_capa(capa_id, &changes).await?;
    tracing::info!("Updated CAPA {}", capa_id);

    Ok(Json(MessageResponse::new("CAPA Successfully Updated")))
}

pub async fn list_capas_for_finding(
    State(state): State<ApiState>,
    ApiPath(finding_id): ApiPath<i64>,
) -> Result<Json<Vec<CapaResponse>>, ApiError> {
    let records = state.db.list_capas_for_finding(finding_id).await?;
    Ok(Json(records.into_iter().map(CapaResponse::from).collect()))
}
