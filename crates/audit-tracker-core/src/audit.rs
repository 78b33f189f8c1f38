use chrono::NaiveDate;

/// Lifecycle states of an audit. Stored as free text, so clients may still
/// send values outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Pending => "Pending",
            AuditStatus::InProgress => "In Progress",
            AuditStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAudit {
    pub title: String,
    pub department: String,
    pub date: NaiveDate,
    pub status: String,
}

impl NewAudit {
    pub fn new(title: String, department: String, date: NaiveDate) -> Self {
        Self {
            title,
            department,
            date,
            status: AuditStatus::default().as_str().to_string(),
        }
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        if let Some(status) = status {
            self.status = status;
        }
        self
    }
}

/// Partial update of an audit. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditChanges {
    pub title: Option<String>,
    pub department: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl AuditChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.department.is_none()
            && self.date.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_new_audit_defaults_to_pending() {
        let audit = NewAudit::new("Q1 Safety Audit".to_string(), "Manufacturing".to_string(), jan_10());
        assert_eq!(audit.status, "Pending");
    }

    #[test]
    fn test_with_status_overrides_default() {
        let audit = NewAudit::new("Q1".to_string(), "Ops".to_string(), jan_10())
            .with_status(Some("In Progress".to_string()));
        assert_eq!(audit.status, "In Progress");

        let audit = NewAudit::new("Q1".to_string(), "Ops".to_string(), jan_10()).with_status(None);
        assert_eq!(audit.status, "Pending");
    }

    #[test]
    fn test_status_display_names() {
        assert_eq!(AuditStatus::InProgress.as_str(), "In Progress");
        assert_eq!(AuditStatus::Completed.as_str(), "Completed");
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(AuditChanges::default().is_empty());
        let changes = AuditChanges {
            status: Some("Completed".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
