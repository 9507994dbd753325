use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    models::purchase::Purchase, service, structs::get_purchases_response::GetPurchasesResponse,
};

pub async fn get_purchases(State(state): State<Arc<AppState>>) -> Response {
    let fetch = tokio::time::timeout(
        state.envy.fetch_timeout(),
        service::get_purchases(&state.pool),
    );

    match fetch.await {
        Ok(Ok(purchases)) => Json(GetPurchasesResponse {
            data: purchases,
            error: None,
        })
        .into_response(),
        Ok(Err(e)) => (
            e.code,
            Json(GetPurchasesResponse {
                data: Vec::new(),
                error: Some(e.message),
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(GetPurchasesResponse {
                data: Vec::new(),
                error: Some("Timed out fetching purchases.".to_string()),
            }),
        )
            .into_response(),
    }
}

pub async fn create_purchase(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(payload): JsonFromRequest<Value>,
) -> Result<Json<Purchase>, ApiError> {
    match service::create_purchase(&payload, &state.pool).await {
        Ok(purchase) => Ok(Json(purchase)),
        Err(e) => Err(e),
    }
}
