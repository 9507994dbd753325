use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    apis::{telegram, twilio},
    dtos::{send_telegram_dto::SendTelegramDto, send_whatsapp_dto::SendWhatsappDto},
    errors::MessagingApiError,
    structs::{
        send_telegram_response::SendTelegramResponse,
        send_whatsapp_response::{SendWhatsappErrorResponse, SendWhatsappResponse},
        telegram_status_response::{TelegramStatusErrorResponse, TelegramStatusResponse},
    },
};

pub async fn send_telegram(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<SendTelegramDto>,
) -> Result<Json<SendTelegramResponse>, ApiError> {
    match telegram::service::send_message(&dto.message, &state.http_client, &state.envy).await {
        Ok(_) => Ok(Json(SendTelegramResponse { success: true })),
        Err(e) => Err(e),
    }
}

pub async fn send_whatsapp(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<SendWhatsappDto>,
) -> Response {
    let result =
        twilio::service::create_whatsapp_message(&dto.to, &dto.body, &state.http_client, &state.envy)
            .await;

    match result {
        Ok(message) => Json(SendWhatsappResponse {
            success: true,
            data: message,
        })
        .into_response(),
        Err(e) => (
            e.code,
            Json(SendWhatsappErrorResponse {
                error: "Failed to send WhatsApp message.".to_string(),
                details: e.message,
            }),
        )
            .into_response(),
    }
}

pub async fn telegram_status(State(state): State<Arc<AppState>>) -> Response {
    let envy = &state.envy;

    let (Some(_), Some(chat_id)) = (&envy.telegram_bot_token, &envy.telegram_chat_id)
    else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(TelegramStatusErrorResponse {
                error: MessagingApiError::TelegramNotConfigured.value().message,
                status: "not_configured".to_string(),
                configured: false,
            }),
        )
            .into_response();
    };

    match telegram::service::get_me(&state.http_client, envy).await {
        Ok(bot) => Json(TelegramStatusResponse {
            status: "connected".to_string(),
            configured: true,
            bot: bot.username,
            chat_id: Some(chat_id.to_string()),
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(TelegramStatusErrorResponse {
                error: e.message,
                status: "error".to_string(),
                configured: false,
            }),
        )
            .into_response(),
    }
}
