use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub static PRODUCT_SORTABLE_FIELDS: [&str; 3] = ["created_at", "rating", "downloads"];

/// Catalog row. The catalog is read-only here; rows are seeded out of band,
/// and `extra` carries whatever fields the storefront attached beyond the
/// typed ones.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub category: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub rating: f64,
    pub downloads: i64,
    pub featured: Option<bool>,
    pub demo_link: Option<String>,
    #[serde(flatten)]
    pub extra: sqlx::types::Json<serde_json::Map<String, serde_json::Value>>,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_flatten_into_the_record() {
        let product = Product {
            id: "prod-1".to_string(),
            title: "Invoice Kit".to_string(),
            description: "Printable invoice templates.".to_string(),
            price: 12.0,
            original_price: None,
            category: "templates".to_string(),
            image: None,
            tags: vec!["pdf".to_string()],
            rating: 4.5,
            downloads: 320,
            featured: Some(true),
            demo_link: None,
            extra: sqlx::types::Json(
                serde_json::from_str(r#"{ "license": "single-seat" }"#).unwrap(),
            ),
            created_at: 1_700_000_000,
        };

        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["license"], "single-seat");
        assert!(json.get("extra").is_none());
    }
}
