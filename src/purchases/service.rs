use serde_json::Value;
use sqlx::PgPool;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::models::purchase::Purchase;

pub async fn create_purchase(payload: &Value, pool: &PgPool) -> Result<Purchase, ApiError> {
    let purchase = Purchase::new(payload);

    let sqlx_result = sqlx::query(
        "
        INSERT INTO purchases (id, data, created_at)
        VALUES ($1, $2, $3)
        ",
    )
    .bind(&purchase.id)
    .bind(&purchase.data)
    .bind(purchase.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(purchase),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_purchases(pool: &PgPool) -> Result<Vec<Purchase>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Purchase>(
        "
        SELECT * FROM purchases
        ORDER BY created_at DESC
        ",
    )
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(purchases) => Ok(purchases),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
