use serde::Serialize;

use crate::messaging::apis::twilio::structs::twilio_message_response::TwilioMessageResponse;

#[derive(Debug, Serialize)]
pub struct SendWhatsappResponse {
    pub success: bool,
    pub data: TwilioMessageResponse,
}

#[derive(Debug, Serialize)]
pub struct SendWhatsappErrorResponse {
    pub error: String,
    pub details: String,
}
