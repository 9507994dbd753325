use serde::Serialize;

use crate::purchases::models::purchase::Purchase;

#[derive(Debug, Serialize)]
pub struct GetPurchasesResponse {
    pub data: Vec<Purchase>,
    pub error: Option<String>,
}
