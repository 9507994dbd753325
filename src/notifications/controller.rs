use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    models::notification::Notification, service,
    structs::save_notification_response::SaveNotificationResponse,
};

pub async fn create_notification(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(payload): JsonFromRequest<Value>,
) -> Result<Json<Notification>, ApiError> {
    match service::create_notification(&payload, &state.pool).await {
        Ok(notification) => Ok(Json(notification)),
        Err(e) => Err(e),
    }
}

// same save as /api/notifications, success-flag response shape
pub async fn save_notification(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(payload): JsonFromRequest<Value>,
) -> Result<Json<SaveNotificationResponse>, ApiError> {
    match service::create_notification(&payload, &state.pool).await {
        Ok(_) => Ok(Json(SaveNotificationResponse { success: true })),
        Err(e) => Err(e),
    }
}
