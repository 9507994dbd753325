use serde::Serialize;

use crate::users::models::user::User;

// `data` is `null` on failure, unlike the other collection envelopes
#[derive(Debug, Serialize)]
pub struct GetUsersResponse {
    pub data: Option<Vec<User>>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_a_null_error() {
        let response = GetUsersResponse {
            data: Some(Vec::new()),
            error: None,
        };

        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, r#"{"data":[],"error":null}"#);
    }

    #[test]
    fn failure_serializes_null_data() {
        let response = GetUsersResponse {
            data: None,
            error: Some("boom".to_string()),
        };

        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, r#"{"data":null,"error":"boom"}"#);
    }
}
