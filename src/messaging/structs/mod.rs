pub mod send_telegram_response;
pub mod send_whatsapp_response;
pub mod telegram_status_response;
