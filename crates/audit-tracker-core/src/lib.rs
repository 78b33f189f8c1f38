pub mod audit;
pub mod finding;
pub mod capa;
pub mod date;
pub mod error;

// Re-exports
pub use audit::{AuditChanges, AuditStatus, NewAudit};
pub use finding::{FindingStatus, NewFinding};
pub use capa::{CapaChanges, CapaStatus, NewCapa};
pub use date::{format_date, parse_date, DATE_FORMAT};
pub use error::{Error, Result};
