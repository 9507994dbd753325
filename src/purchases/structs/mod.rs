pub mod get_purchases_response;
