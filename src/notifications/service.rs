use serde_json::Value;
use sqlx::PgPool;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::models::notification::Notification;

pub async fn create_notification(payload: &Value, pool: &PgPool) -> Result<Notification, ApiError> {
    let notification = Notification::new(payload);

    let sqlx_result = sqlx::query(
        "
        INSERT INTO notifications (id, data, created_at)
        VALUES ($1, $2, $3)
        ",
    )
    .bind(&notification.id)
    .bind(&notification.data)
    .bind(notification.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(notification),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
