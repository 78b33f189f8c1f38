#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindingStatus {
    #[default]
    Open,
    Closed,
}

impl FindingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingStatus::Open => "Open",
            FindingStatus::Closed => "Closed",
        }
    }
}

/// A finding to be attached to an audit. The audit id is not checked against
/// existing audits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFinding {
    pub audit_id: i64,
    pub description: String,
    pub severity: String,
    pub status: String,
}

impl NewFinding {
    pub fn new(audit_id: i64, description: String, severity: String) -> Self {
        Self {
            audit_id,
            description,
            severity,
            status: FindingStatus::default().as_str().to_string(),
        }
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        if let Some(status) = status {
            self.status = status;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_finding_defaults_to_open() {
        let finding = NewFinding::new(1, "Missing PPE".to_string(), "Major".to_string());
        assert_eq!(finding.status, "Open");
        assert_eq!(finding.severity, "Major");
    }

    #[test]
    fn test_with_status() {
        let finding = NewFinding::new(1, "Spill".to_string(), "Minor".to_string())
            .with_status(Some(FindingStatus::Closed.as_str().to_string()));
        assert_eq!(finding.status, "Closed");
    }
}
