use serde::{Deserialize, Serialize};

// https://www.twilio.com/docs/usage/twilios-response#response-formats-exceptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioErrorResponse {
    pub code: Option<i64>,
    pub message: String,
    pub status: Option<i64>,
}
