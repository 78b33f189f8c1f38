use std::sync::Arc;

use audit_tracker_db::Database;

#[derive(Clone)]
pub struct ApiState {
    pub db: Arc<Database>,
}

impl ApiState {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }
}
