use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::app::util::time;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub data: sqlx::types::JsonValue,
    #[sqlx(try_from = "i64")]
    pub updated_at: u64,
    #[sqlx(try_from = "i64")]
    pub created_at: u64,
}

impl User {
    /// The payload names its own record through `id` or `userId`.
    pub fn new(payload: &Value) -> Self {
        let current_time = time::current_time_in_secs();

        let id = payload
            .get("id")
            .or_else(|| payload.get("userId"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        return Self {
            id,
            data: payload.clone(),
            updated_at: current_time,
            created_at: current_time,
        };
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_keeps_the_payload_id() {
        let user = User::new(&json!({ "id": "user-1", "name": "Ada" }));

        assert_eq!(user.id, "user-1");
        assert_eq!(user.data["name"], "Ada");
    }

    #[test]
    fn new_accepts_user_id_alias() {
        let user = User::new(&json!({ "userId": "user-2" }));

        assert_eq!(user.id, "user-2");
    }

    #[test]
    fn new_generates_an_id_when_missing() {
        let user = User::new(&json!({ "name": "anonymous" }));

        assert_eq!(user.id.len(), 36);
    }
}
