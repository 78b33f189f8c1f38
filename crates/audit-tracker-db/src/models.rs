use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AuditRecord {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FindingRecord {
    pub id: i64,
    pub audit_id: i64,
    pub description: String,
    pub severity: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CapaRecord {
    pub id: i64,
    pub finding_id: i64,
    pub action: String,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub status: String,
}
