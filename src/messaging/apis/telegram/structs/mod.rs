pub mod telegram_get_me_response;
pub mod telegram_send_message_response;
