use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::app::util::time;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Purchase {
    pub id: String,
    pub data: sqlx::types::JsonValue,
    pub created_at: i64,
}

impl Purchase {
    pub fn new(payload: &Value) -> Self {
        return Self {
            id: payload
                .get("id")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            data: payload.clone(),
            created_at: time::current_time_in_secs() as i64,
        };
    }
}
