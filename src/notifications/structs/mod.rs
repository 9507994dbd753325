pub mod save_notification_response;
