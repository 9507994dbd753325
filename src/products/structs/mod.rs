pub mod get_products_response;
