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
    models::deposit::Deposit, service, structs::get_deposits_response::GetDepositsResponse,
};

pub async fn get_deposits(State(state): State<Arc<AppState>>) -> Response {
    let fetch = tokio::time::timeout(state.envy.fetch_timeout(), service::get_deposits(&state.pool));

    match fetch.await {
        Ok(Ok(deposits)) => Json(GetDepositsResponse {
            data: deposits,
            error: None,
        })
        .into_response(),
        Ok(Err(e)) => (
            e.code,
            Json(GetDepositsResponse {
                data: Vec::new(),
                error: Some(e.message),
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(GetDepositsResponse {
                data: Vec::new(),
                error: Some("Timed out fetching deposits.".to_string()),
            }),
        )
            .into_response(),
    }
}

pub async fn create_deposit(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(payload): JsonFromRequest<Value>,
) -> Result<Json<Deposit>, ApiError> {
    match service::create_deposit(&payload, &state.pool).await {
        Ok(deposit) => Ok(Json(deposit)),
        Err(e) => Err(e),
    }
}
