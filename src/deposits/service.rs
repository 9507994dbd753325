use serde_json::Value;
use sqlx::PgPool;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::models::deposit::Deposit;

pub async fn create_deposit(payload: &Value, pool: &PgPool) -> Result<Deposit, ApiError> {
    let deposit = Deposit::new(payload);

    let sqlx_result = sqlx::query(
        "
        INSERT INTO deposits (id, data, created_at)
        VALUES ($1, $2, $3)
        ",
    )
    .bind(&deposit.id)
    .bind(&deposit.data)
    .bind(deposit.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(deposit),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_deposits(pool: &PgPool) -> Result<Vec<Deposit>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Deposit>(
        "
        SELECT * FROM deposits
        ORDER BY created_at DESC
        ",
    )
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(deposits) => Ok(deposits),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
