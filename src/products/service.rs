use sqlx::PgPool;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::{dtos::get_products_filter_dto::GetProductsFilterDto, models::product::Product};

pub async fn get_products(
    dto: &GetProductsFilterDto,
    pool: &PgPool,
) -> Result<Vec<Product>, ApiError> {
    let sql_result = dto.to_sql();
    let Ok(sql) = sql_result
    else {
        return Err(sql_result.err().unwrap());
    };

    let mut sqlx = sqlx::query_as::<_, Product>(&sql);

    if let Some(category) = &dto.category {
        sqlx = sqlx.bind(category);
    }
    if let Some(featured) = dto.featured {
        sqlx = sqlx.bind(featured);
    }

    match sqlx.fetch_all(pool).await {
        Ok(products) => Ok(products),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
