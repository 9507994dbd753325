use serde::{Deserialize, Serialize};

// https://core.telegram.org/bots/api#sendmessage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramSendMessageResponse {
    pub ok: bool,
    pub result: Option<serde_json::Value>,
    pub description: Option<String>,
}
