use serde::Serialize;

use crate::products::models::product::Product;

#[derive(Debug, Serialize)]
pub struct GetProductsResponse {
    pub data: Vec<Product>,
    pub error: Option<String>,
}
