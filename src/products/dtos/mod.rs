pub mod get_products_filter_dto;
