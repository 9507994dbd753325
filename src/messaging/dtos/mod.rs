pub mod send_telegram_dto;
pub mod send_whatsapp_dto;
