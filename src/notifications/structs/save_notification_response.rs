use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SaveNotificationResponse {
    pub success: bool,
}
