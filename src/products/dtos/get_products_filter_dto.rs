use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::{app::models::api_error::ApiError, products::models::product::PRODUCT_SORTABLE_FIELDS};

#[derive(Debug, Deserialize, Validate)]
pub struct GetProductsFilterDto {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub sort: Option<String>,
    #[validate(range(max = 100, message = "limit must be less than 100."))]
    pub limit: Option<u8>,
}

impl GetProductsFilterDto {
    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "SELECT * FROM products".to_string();
        let mut clauses = Vec::new();

        let mut sort_field = "created_at".to_string();
        let mut sort_order = "DESC".to_string();
        let mut page_limit: u8 = 50;

        let mut index: u8 = 0;

        // WHERE CLAUSES
        if self.category.is_some() {
            index += 1;
            clauses.push(["category = $", &index.to_string()].concat());
        }
        if self.featured.is_some() {
            index += 1;
            clauses.push(["featured = $", &index.to_string()].concat());
        }

        // SORT
        if let Some(sort) = &self.sort {
            let sort_params: Vec<&str> = sort.split(",").collect();

            if sort_params.len() != 2 {
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "Malformed sort query.".to_string(),
                });
            }
            if !PRODUCT_SORTABLE_FIELDS.contains(&sort_params[0]) {
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "Invalid sort field.".to_string(),
                });
            }

            sort_field = sort_params[0].to_string();
            sort_order = sort_params[1].to_uppercase();

            if sort_order != "ASC" && sort_order != "DESC" {
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "Malformed sort query.".to_string(),
                });
            }
        }

        // CLAUSES BUILDER
        let mut has_inserted_where = false;

        for clause in clauses {
            if !has_inserted_where {
                sql.push_str(" WHERE ");
                has_inserted_where = true;
            } else {
                sql.push_str(" AND ");
            }

            sql.push_str(&clause);
        }

        // ORDER BY
        sql.push_str(&[" ORDER BY ", &sort_field, " ", &sort_order].concat());

        // LIMIT
        if let Some(limit) = self.limit {
            page_limit = limit;
        }

        sql.push_str(&[" LIMIT ", &page_limit.to_string()].concat());

        tracing::debug!(%sql);

        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(
        category: Option<&str>,
        featured: Option<bool>,
        sort: Option<&str>,
    ) -> GetProductsFilterDto {
        GetProductsFilterDto {
            category: category.map(str::to_string),
            featured,
            sort: sort.map(str::to_string),
            limit: None,
        }
    }

    #[test]
    fn defaults_to_newest_first() {
        let sql = dto(None, None, None).to_sql().unwrap();

        assert_eq!(sql, "SELECT * FROM products ORDER BY created_at DESC LIMIT 50");
    }

    #[test]
    fn chains_where_clauses_in_bind_order() {
        let sql = dto(Some("templates"), Some(true), None).to_sql().unwrap();

        assert_eq!(
            sql,
            "SELECT * FROM products WHERE category = $1 AND featured = $2 ORDER BY created_at DESC LIMIT 50"
        );
    }

    #[test]
    fn accepts_allowlisted_sort_fields() {
        let sql = dto(None, None, Some("rating,asc")).to_sql().unwrap();

        assert_eq!(sql, "SELECT * FROM products ORDER BY rating ASC LIMIT 50");
    }

    #[test]
    fn rejects_unknown_sort_fields() {
        let result = dto(None, None, Some("price; DROP TABLE products,asc")).to_sql();

        assert_eq!(result.unwrap_err().code, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn rejects_malformed_sort_queries() {
        let result = dto(None, None, Some("rating")).to_sql();

        assert_eq!(result.unwrap_err().code, StatusCode::BAD_REQUEST);
    }
}
