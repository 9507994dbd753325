use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum UsersApiError {
    UserIdRequired,
    UserNotFound,
}

impl UsersApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::UserIdRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "User ID is required".to_string(),
            },
            // the surface does not tell "missing" apart from any other failure
            Self::UserNotFound => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "User not found.".to_string(),
            },
        }
    }
}
