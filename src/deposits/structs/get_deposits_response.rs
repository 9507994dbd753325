use serde::Serialize;

use crate::deposits::models::deposit::Deposit;

// `data` stays an array on failure
#[derive(Debug, Serialize)]
pub struct GetDepositsResponse {
    pub data: Vec<Deposit>,
    pub error: Option<String>,
}
