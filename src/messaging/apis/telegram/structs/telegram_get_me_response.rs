use serde::{Deserialize, Serialize};

// https://core.telegram.org/bots/api#getme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramGetMeResponse {
    pub ok: bool,
    pub result: Option<TelegramBotInfo>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramBotInfo {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}
