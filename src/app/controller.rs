use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn get_root(State(_state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "status": "online" }))
}
