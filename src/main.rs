use pat_server::{build_app, config::AppConfig, run_server, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pat_server=debug")),
        )
        .init();

    let config = AppConfig::from_env();
    let app = build_app(AppState::from_config(&config));

    run_server(app, config.port).await?;
    Ok(())
}
