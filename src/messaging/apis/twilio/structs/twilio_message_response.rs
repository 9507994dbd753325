use serde::{Deserialize, Serialize};

// https://www.twilio.com/docs/sms/api/message-resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioMessageResponse {
    pub sid: String,
    pub status: String,
    pub to: String,
    pub from: String,
    pub body: Option<String>,
    pub date_created: Option<String>,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}
