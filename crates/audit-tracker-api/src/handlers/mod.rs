use serde::{Deserialize, Serialize};

pub mod audit;
pub mod capa;
pub mod finding;
pub mod health;

/// Confirmation body returned by write endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            id: None,
        }
    }

    pub fn created(message: &str, id: i64) -> Self {
        Self {
            message: message.to_string(),
            id: Some(id),
        }
    }
}
