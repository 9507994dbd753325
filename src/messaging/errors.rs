use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum MessagingApiError {
    TelegramNotConfigured,
    WhatsappNotConfigured,
}

impl MessagingApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::TelegramNotConfigured => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Telegram bot is not configured.".to_string(),
            },
            Self::WhatsappNotConfigured => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "WhatsApp sender is not configured.".to_string(),
            },
        }
    }
}
