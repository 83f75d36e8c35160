use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

use super::models::{PatQuery, PatResponse};

pub async fn pat(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PatQuery>, QueryRejection>,
) -> Result<Json<PatResponse>, ApiError> {
    // A query string that fails to decode is treated the same as no message.
    let message = match query {
        Ok(Query(PatQuery {
            message: Some(message),
        })) if !message.is_empty() => message,
        Ok(_) => return Err(ApiError::MissingPrompt),
        Err(rejection) => {
            debug!(%rejection, "rejecting undecodable query string");
            return Err(ApiError::MissingPrompt);
        }
    };

    let response_text = state.completion.tutor_reply(&message).await?;

    Ok(Json(PatResponse { response_text }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
