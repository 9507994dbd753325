use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::{get_users_filter_dto::GetUsersFilterDto, save_user_data_dto::SaveUserDataDto},
    errors::UsersApiError,
    models::user::User,
    service,
    structs::{get_users_response::GetUsersResponse, save_user_response::SaveUserResponse},
};

pub async fn get_user_from_header(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<User>, ApiError> {
    let Some(user_id) = headers.get("x-user-id").and_then(|value| value.to_str().ok())
    else {
        return Err(UsersApiError::UserIdRequired.value());
    };

    if user_id.is_empty() {
        return Err(UsersApiError::UserIdRequired.value());
    }

    match service::get_user_by_id(user_id, &state.pool).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e),
    }
}

pub async fn get_users(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetUsersFilterDto>,
) -> Response {
    if let Some(user_id) = &dto.user_id {
        return match service::get_user_by_id(user_id, &state.pool).await {
            Ok(user) => Json(user).into_response(),
            Err(e) => (
                e.code,
                Json(GetUsersResponse {
                    data: None,
                    error: Some(e.message),
                }),
            )
                .into_response(),
        };
    }

    match tokio::time::timeout(state.envy.fetch_timeout(), service::get_users(&state.pool)).await {
        Ok(Ok(users)) => Json(GetUsersResponse {
            data: Some(users),
            error: None,
        })
        .into_response(),
        Ok(Err(e)) => (
            e.code,
            Json(GetUsersResponse {
                data: None,
                error: Some(e.message),
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(GetUsersResponse {
                data: None,
                error: Some("Timed out fetching users.".to_string()),
            }),
        )
            .into_response(),
    }
}

pub async fn save_user(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(payload): JsonFromRequest<Value>,
) -> Response {
    match service::save_user(&payload, &state.pool).await {
        Ok(_) => Json(SaveUserResponse {
            success: true,
            error: None,
        })
        .into_response(),
        Err(e) => (
            e.code,
            Json(SaveUserResponse {
                success: false,
                error: Some(e.message),
            }),
        )
            .into_response(),
    }
}

pub async fn save_user_data(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<SaveUserDataDto>,
) -> Result<Json<User>, ApiError> {
    let Some(user_id) = dto.user_id.as_deref().filter(|id| !id.is_empty())
    else {
        return Err(UsersApiError::UserIdRequired.value());
    };

    let user_data = dto.user_data.unwrap_or_else(|| json!({}));

    match service::save_user_data(user_id, &user_data, &state.pool).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e),
    }
}
