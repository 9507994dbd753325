pub mod twilio_error_response;
pub mod twilio_message_response;
