use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PatQuery {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PatResponse {
    #[serde(rename = "responseText")]
    pub response_text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
