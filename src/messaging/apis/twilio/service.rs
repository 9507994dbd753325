use axum::http::StatusCode;

use crate::{
    app::{env::Envy, errors::DefaultApiError, models::api_error::ApiError},
    messaging::errors::MessagingApiError,
};

use super::structs::{
    twilio_error_response::TwilioErrorResponse, twilio_message_response::TwilioMessageResponse,
};

static TWILIO_API_URL: &str = "https://api.twilio.com/2010-04-01";

/// Twilio addresses WhatsApp recipients as `whatsapp:<E.164 number>`.
pub fn whatsapp_address(value: &str) -> String {
    match value.starts_with("whatsapp:") {
        true => value.to_string(),
        false => ["whatsapp:", value].concat(),
    }
}

pub async fn create_whatsapp_message(
    to: &str,
    body: &str,
    client: &reqwest::Client,
    envy: &Envy,
) -> Result<TwilioMessageResponse, ApiError> {
    let (Some(account_sid), Some(auth_token), Some(from)) = (
        &envy.twilio_account_sid,
        &envy.twilio_auth_token,
        &envy.twilio_whatsapp_from,
    )
    else {
        return Err(MessagingApiError::WhatsappNotConfigured.value());
    };

    let url = [TWILIO_API_URL, "/Accounts/", account_sid, "/Messages.json"].concat();

    let params = [
        ("From", whatsapp_address(from)),
        ("To", whatsapp_address(to)),
        ("Body", body.to_string()),
    ];

    let result = client
        .post(url)
        .basic_auth(account_sid, Some(auth_token))
        .form(&params)
        .send()
        .await;

    match result {
        Ok(res) => {
            let code = res.status();

            match res.text().await {
                Ok(text) => match code.is_success() {
                    true => match serde_json::from_str::<TwilioMessageResponse>(&text) {
                        Ok(message) => Ok(message),
                        Err(_) => {
                            tracing::error!(%text);
                            Err(DefaultApiError::InternalServerError.value())
                        }
                    },
                    false => {
                        let message = match serde_json::from_str::<TwilioErrorResponse>(&text) {
                            Ok(error) => error.message,
                            Err(_) => text,
                        };
                        tracing::error!(%message);
                        Err(ApiError {
                            code: StatusCode::INTERNAL_SERVER_ERROR,
                            message,
                        })
                    }
                },
                Err(e) => {
                    tracing::error!(%e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            }
        }
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to reach Twilio.".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_bare_numbers() {
        assert_eq!(whatsapp_address("+15551234567"), "whatsapp:+15551234567");
    }

    #[test]
    fn leaves_prefixed_addresses_alone() {
        assert_eq!(
            whatsapp_address("whatsapp:+15551234567"),
            "whatsapp:+15551234567"
        );
    }
}
