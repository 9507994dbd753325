use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TelegramStatusResponse {
    pub status: String,
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<String>,
    #[serde(rename = "chatId", skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TelegramStatusErrorResponse {
    pub error: String,
    pub status: String,
    pub configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_status_uses_the_wire_field_names() {
        let response = TelegramStatusResponse {
            status: "connected".to_string(),
            configured: true,
            bot: Some("bazaar_bot".to_string()),
            chat_id: Some("-100200300".to_string()),
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status":"connected","configured":true,"bot":"bazaar_bot","chatId":"-100200300"}"#
        );
    }
}
