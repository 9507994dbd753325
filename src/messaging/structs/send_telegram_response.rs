use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SendTelegramResponse {
    pub success: bool,
}
