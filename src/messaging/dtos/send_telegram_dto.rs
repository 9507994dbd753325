use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SendTelegramDto {
    pub message: String,
}
