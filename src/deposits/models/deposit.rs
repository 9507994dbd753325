use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::app::util::time;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Deposit {
    pub id: String,
    pub data: sqlx::types::JsonValue,
    pub created_at: i64,
}

impl Deposit {
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

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_stores_the_payload_verbatim() {
        let payload = json!({ "id": "dep-1", "amount": 25.0, "currency": "USD" });

        let deposit = Deposit::new(&payload);

        assert_eq!(deposit.id, "dep-1");
        assert_eq!(deposit.data, payload);
    }

    #[test]
    fn new_generates_an_id_when_the_payload_has_none() {
        let deposit = Deposit::new(&json!({ "amount": 10 }));

        assert_eq!(deposit.id.len(), 36);
    }
}
