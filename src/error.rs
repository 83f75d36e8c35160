use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::ErrorResponse;
use crate::completion::CompletionError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Prompt is required")]
    MissingPrompt,
    #[error(transparent)]
    Upstream(#[from] CompletionError),
    #[error("Not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Upstream detail is logged by the forwarder and never echoed back.
        let (status, message) = match self {
            Self::MissingPrompt => (StatusCode::BAD_REQUEST, "Prompt is required"),
            Self::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
            Self::NotFound => (StatusCode::NOT_FOUND, "Not found"),
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
