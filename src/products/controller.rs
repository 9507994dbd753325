use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    dtos::get_products_filter_dto::GetProductsFilterDto, service,
    structs::get_products_response::GetProductsResponse,
};

pub async fn get_products(
    State(state): State<Arc<AppState>>,
    Query(dto): Query<GetProductsFilterDto>,
) -> Response {
    if let Err(e) = dto.validate() {
        return ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }
        .into_response();
    }

    match service::get_products(&dto, &state.pool).await {
        Ok(products) => Json(GetProductsResponse {
            data: products,
            error: None,
        })
        .into_response(),
        Err(e) => (
            e.code,
            Json(GetProductsResponse {
                data: Vec::new(),
                error: Some(e.message),
            }),
        )
            .into_response(),
    }
}
