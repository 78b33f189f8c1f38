use chrono::NaiveDate;

/// Lifecycle states of a corrective/preventive action.
///
/// `InProgress` is the default for both the `capa.status` column and the
/// create endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapaStatus {
    #[default]
    InProgress,
    Completed,
}

impl CapaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapaStatus::InProgress => "In Progress",
            CapaStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCapa {
    pub finding_id: i64,
    pub action: String,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub status: String,
}

impl NewCapa {
    pub fn new(finding_id: i64, action: String, assignee: String, due_date: NaiveDate) -> Self {
        Self {
            finding_id,
            action,
            assignee,
            due_date,
            status: CapaStatus::default().as_str().to_string(),
        }
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        if let Some(status) = status {
            self.status = status;
        }
        self
    }
}

/// Partial update of a CAPA. Status cannot be changed through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapaChanges {
    pub action: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl CapaChanges {
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.assignee.is_none() && self.due_date.is_none()
    }
}
