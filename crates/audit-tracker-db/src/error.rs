use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Audit not found: {0}")]
    AuditNotFound(i64),

    #[error("CAPA not found: {0}")]
    CapaNotFound(i64),

    /// A column constraint (length limit, not null) rejected the write.
    #[error("Constraint violated: {0}")]
    Constraint(String),

    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::AuditNotFound(_) | Error::CapaNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
