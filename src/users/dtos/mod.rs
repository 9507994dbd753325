pub mod get_users_filter_dto;
pub mod save_user_data_dto;
