use axum::http::StatusCode;
use serde_json::json;

use crate::{
    app::{env::Envy, errors::DefaultApiError, models::api_error::ApiError},
    messaging::errors::MessagingApiError,
};

use super::structs::{
    telegram_get_me_response::{TelegramBotInfo, TelegramGetMeResponse},
    telegram_send_message_response::TelegramSendMessageResponse,
};

static TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub async fn send_message(
    message: &str,
    client: &reqwest::Client,
    envy: &Envy,
) -> Result<TelegramSendMessageResponse, ApiError> {
    let (Some(token), Some(chat_id)) = (&envy.telegram_bot_token, &envy.telegram_chat_id)
    else {
        return Err(MessagingApiError::TelegramNotConfigured.value());
    };

    let url = [TELEGRAM_API_URL, "/bot", token, "/sendMessage"].concat();

    let result = client
        .post(url)
        .json(&json!({ "chat_id": chat_id, "text": message }))
        .send()
        .await;

    match result {
        Ok(res) => match res.text().await {
            Ok(text) => match serde_json::from_str::<TelegramSendMessageResponse>(&text) {
                Ok(response) => match response.ok {
                    true => Ok(response),
                    false => {
                        let message = response
                            .description
                            .unwrap_or("Telegram rejected the message.".to_string());
                        tracing::error!(%message);
                        Err(ApiError {
                            code: StatusCode::INTERNAL_SERVER_ERROR,
                            message,
                        })
                    }
                },
                Err(_) => {
                    tracing::error!(%text);
                    Err(DefaultApiError::InternalServerError.value())
                }
            },
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        },
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to reach Telegram.".to_string(),
            })
        }
    }
}

pub async fn get_me(client: &reqwest::Client, envy: &Envy) -> Result<TelegramBotInfo, ApiError> {
    let Some(token) = &envy.telegram_bot_token
    else {
        return Err(MessagingApiError::TelegramNotConfigured.value());
    };

    let url = [TELEGRAM_API_URL, "/bot", token, "/getMe"].concat();

    let result = client.get(url).send().await;

    match result {
        Ok(res) => match res.text().await {
            Ok(text) => match serde_json::from_str::<TelegramGetMeResponse>(&text) {
                Ok(response) => match response.result {
                    Some(bot) if response.ok => Ok(bot),
                    _ => {
                        let message = response
                            .description
                            .unwrap_or("Telegram did not identify the bot.".to_string());
                        tracing::error!(%message);
                        Err(ApiError {
                            code: StatusCode::INTERNAL_SERVER_ERROR,
                            message,
                        })
                    }
                },
                Err(_) => {
                    tracing::error!(%text);
                    Err(DefaultApiError::InternalServerError.value())
                }
            },
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        },
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to reach Telegram.".to_string(),
            })
        }
    }
}
