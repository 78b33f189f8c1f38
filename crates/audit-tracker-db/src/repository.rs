use crate::{
    models::{AuditRecord, CapaRecord, FindingRecord},
    Error, Result,
};
use audit_tracker_core::{AuditChanges, CapaChanges, NewAudit, NewCapa, NewFinding};
use sqlx::{
    error::ErrorKind,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;

#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open a file-backed database, creating the file if it does not exist
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| Error::Connection(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    ///
    /// Every connection to `sqlite::memory:` gets its own database, so the pool
    /// holds exactly one connection and never recycles it.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS audit (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title VARCHAR(100) NOT NULL
                    CONSTRAINT audit_title_length CHECK (length(title) <= 100),
                department VARCHAR(50) NOT NULL
                    CONSTRAINT audit_department_length CHECK (length(department) <= 50),
                date DATE NOT NULL,
                status VARCHAR(25) NOT NULL DEFAULT 'Pending'
                    CONSTRAINT audit_status_length CHECK (length(status) <= 25)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // No FOREIGN KEY on audit_id: deleting an audit leaves its findings.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS finding (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                audit_id INTEGER NOT NULL,
                description VARCHAR(250) NOT NULL
                    CONSTRAINT finding_description_length CHECK (length(description) <= 250),
                severity VARCHAR(25) NOT NULL
                    CONSTRAINT finding_severity_length CHECK (length(severity) <= 25),
                status VARCHAR(25) NOT NULL DEFAULT 'Open'
                    CONSTRAINT finding_status_length CHECK (length(status) <= 25)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS capa (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                finding_id INTEGER NOT NULL,
                action VARCHAR(250) NOT NULL
                    CONSTRAINT capa_action_length CHECK (length(action) <= 250),
                assignee VARCHAR(50) NOT NULL
                    CONSTRAINT capa_assignee_length CHECK (length(assignee) <= 50),
                due_date DATE NOT NULL,
                status VARCHAR(25) NOT NULL DEFAULT 'In Progress'
                    CONSTRAINT capa_status_length CHECK (length(status) <= 25)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Create indexes
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_finding_audit_id ON finding(audit_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_capa_finding_id ON capa(finding_id)")
            .execute(&self.pool)
            .await?;

        tracing::debug!("Database schema ready");

        Ok(())
    }

    // ========================================================================
    // Audit Operations
    // ========================================================================

    /// Insert a new audit and return the stored record
    pub async fn create_audit(&self, audit: &NewAudit) -> Result<AuditRecord> {
        let id = sqlx::query(
            "INSERT INTO audit (title, department, date, status) VALUES (?, ?, ?, ?)",
        )
        .bind(&audit.title)
        .bind(&audit.department)
        .bind(audit.date)
        .bind(&audit.status)
        .execute(&self.pool)
        .await
        .map_err(constraint_error)?
        .last_insert_rowid();

        Ok(AuditRecord {
            id,
            title: audit.title.clone(),
            department: audit.department.clone(),
            date: audit.date,
            status: audit.status.clone(),
        })
    }

    /// Get audit by ID
    pub async fn get_audit(&self, id: i64) -> Result<AuditRecord> {
        sqlx::query_as::<_, AuditRecord>("SELECT * FROM audit WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(Error::AuditNotFound(id))
    }

    /// List all audits in insertion order
    pub async fn list_audits(&self) -> Result<Vec<AuditRecord>> {
        let records = sqlx::query_as::<_, AuditRecord>("SELECT * FROM audit ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    /// Overwrite the supplied fields of an audit and return the result
    pub async fn update_audit(&self, id: i64, changes: &AuditChanges) -> Result<AuditRecord> {
        if changes.is_empty() {
            return self.get_audit(id).await;
        }

        let result = sqlx::query(
            r#"
            UPDATE audit SET
                title = COALESCE(?, title),
                department = COALESCE(?, department),
                date = COALESCE(?, date),
                status = COALESCE(?, status)
            WHERE id = ?
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.department)
        .bind(changes.date)
        .bind(&changes.status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(constraint_error)?;

        if result.rows_affected() == 0 {
            return Err(Error::AuditNotFound(id));
        }

        self.get_audit(id).await
    }

    /// Delete an audit. Findings referencing it are kept.
    pub async fn delete_audit(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM audit WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::AuditNotFound(id));
        }

        Ok(())
    }

    // ========================================================================
    // Finding Operations
    // ========================================================================

    /// Insert a new finding and return the stored record
    pub async fn create_finding(&self, finding: &NewFinding) -> Result<FindingRecord> {
        let id = sqlx::query(
            "INSERT INTO finding (audit_id, description, severity, status) VALUES (?, ?, ?, ?)",
        )
        .bind(finding.audit_id)
        .bind(&finding.description)
        .bind(&finding.severity)
        .bind(&finding.status)
        .execute(&self.pool)
        .await
        .map_err(constraint_error)?
        .last_insert_rowid();

        Ok(FindingRecord {
            id,
            audit_id: finding.audit_id,
            description: finding.description.clone(),
            severity: finding.severity.clone(),
            status: finding.status.clone(),
        })
    }

    /// Get findings recorded against an audit
    pub async fn list_findings_for_audit(&self, audit_id: i64) -> Result<Vec<FindingRecord>> {
        let records = sqlx::query_as::<_, FindingRecord>(
            "SELECT * FROM finding WHERE audit_id = ? ORDER BY id",
        )
        .bind(audit_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    // ========================================================================
    // CAPA Operations
    // ========================================================================

    /// Insert a new CAPA and return the stored record
    pub async fn create_capa(&self, capa: &NewCapa) -> Result<CapaRecord> {
        let id = sqlx::query(
            r#"
            INSERT INTO capa (finding_id, action, assignee, due_date, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(capa.finding_id)
        .bind(&capa.action)
        .bind(&capa.assignee)
        .bind(capa.due_date)
        .bind(&capa.status)
        .execute(&self.pool)
        .await
        .map_err(constraint_error)?
        .last_insert_rowid();

        Ok(CapaRecord {
            id,
            finding_id: capa.finding_id,
            action: capa.action.clone(),
            assignee: capa.assignee.clone(),
            due_date: capa.due_date,
            status: capa.status.clone(),
        })
    }

    /// Get CAPA by ID
    pub async fn get_capa(&self, id: i64) -> Result<CapaRecord> {
        sqlx::query_as::<_, CapaRecord>("SELECT * FROM capa WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(Error::CapaNotFound(id))
    }

    /// Overwrite action, assignee or due date of a CAPA
    pub async fn update_capa(&self, id: i64, changes: &CapaChanges) -> Result<CapaRecord> {
        if changes.is_empty() {
            return self.get_capa(id).await;
        }

        let result = sqlx::query(
            r#"
            UPDATE capa SET
                action = COALESCE(?, action),
                assignee = COALESCE(?, assignee),
                due_date = COALESCE(?, due_date)
            WHERE id = ?
            "#,
        )
        .bind(&changes.action)
        .bind(&changes.assignee)
        .bind(changes.due_date)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(constraint_error)?;

        if result.rows_affected() == 0 {
            return Err(Error::CapaNotFound(id));
        }

        self.get_capa(id).await
    }

    /// Get CAPAs raised against a finding
    pub async fn list_capas_for_finding(&self, finding_id: i64) -> Result<Vec<CapaRecord>> {
        let records = sqlx::query_as::<_, CapaRecord>(
            "SELECT * FROM capa WHERE finding_id = ? ORDER BY id",
        )
        .bind(finding_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}

fn constraint_error(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(ref db_err) = err {
        if matches!(
            db_err.kind(),
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation
        ) {
            return Error::Constraint(db_err.message().to_string());
        }
    }
    Error::Sqlx(err)
}
