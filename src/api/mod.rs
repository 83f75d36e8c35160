mod handlers;
mod models;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub use handlers::{not_found, pat};
pub use models::{ErrorResponse, PatQuery, PatResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/pat", get(pat))
        .fallback(not_found)
        .with_state(state)
}
