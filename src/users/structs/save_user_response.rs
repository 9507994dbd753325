use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SaveUserResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_the_error_field() {
        let response = SaveUserResponse {
            success: true,
            error: None,
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"success":true}"#
        );
    }
}
