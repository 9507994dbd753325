pub mod get_deposits_response;
