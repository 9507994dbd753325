use axum::http::StatusCode;
use serde_json::Value;
use sqlx::PgPool;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError, util::time};

use super::{errors::UsersApiError, models::user::User};

pub async fn save_user(payload: &Value, pool: &PgPool) -> Result<User, ApiError> {
    let user = User::new(payload);

    let sqlx_result = sqlx::query(
        "
        INSERT INTO users (id, data, updated_at, created_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE SET data = $2, updated_at = $3
        ",
    )
    .bind(&user.id)
    .bind(&user.data)
    .bind(user.updated_at.to_owned() as i64)
    .bind(user.created_at.to_owned() as i64)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(user),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_users(pool: &PgPool) -> Result<Vec<User>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, User>(
        "
        SELECT * FROM users
        ORDER BY created_at DESC
        ",
    )
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(users) => Ok(users),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_user_by_id(id: &str, pool: &PgPool) -> Result<User, ApiError> {
    let sqlx_result = sqlx::query_as::<_, User>(
        "
        SELECT * FROM users WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(user) => match user {
            Some(user) => Ok(user),
            None => Err(UsersApiError::UserNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn save_user_data(
    user_id: &str,
    user_data: &Value,
    pool: &PgPool,
) -> Result<User, ApiError> {
    let sqlx_result = sqlx::query_as::<_, User>(
        "
        UPDATE users SET data = $1, updated_at = $2
        WHERE id = $3
        RETURNING *
        ",
    )
    .bind(user_data)
    .bind(time::current_time_in_secs() as i64)
    .bind(user_id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(user) => match user {
            Some(user) => Ok(user),
            None => Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to save user data.".to_string(),
            }),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
