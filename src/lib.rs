pub mod api;
pub mod completion;
pub mod config;
pub mod error;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::completion::CompletionClient;
use crate::config::AppConfig;

pub struct AppState {
    pub completion: CompletionClient,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Arc<Self> {
        Arc::new(Self {
            completion: CompletionClient::new(config.openai_api_key.clone()),
        })
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    serve(listener, app).await
}

/// Serves `app` on an already bound listener, logging readiness first.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    let port = listener.local_addr()?.port();
    info!(port, "Server is running on http://localhost:{port}");

    axum::serve(listener, app).await
}
