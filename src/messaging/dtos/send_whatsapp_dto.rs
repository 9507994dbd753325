use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SendWhatsappDto {
    pub to: String,
    pub body: String,
}
