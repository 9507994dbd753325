use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetUsersFilterDto {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
