use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct SaveUserDataDto {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "userData")]
    pub user_data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let dto: SaveUserDataDto =
            serde_json::from_str(r#"{ "userId": "user-1", "userData": { "plan": "pro" } }"#)
                .unwrap();

        assert_eq!(dto.user_id.as_deref(), Some("user-1"));
        assert_eq!(dto.user_data.unwrap()["plan"], "pro");
    }

    #[test]
    fn tolerates_a_missing_user_id() {
        let dto: SaveUserDataDto = serde_json::from_str(r#"{ "userData": {} }"#).unwrap();

        assert!(dto.user_id.is_none());
    }
}
