mod app;
mod config;
mod db;
mod error;
mod state;
mod students;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "student_records=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env();
    tracing::info!(ui_style = config.ui_style.as_str(), "starting student records");

    // No retry: without the database there is nothing to serve.
    let app_state = match AppState::init(config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = ?e, "database unavailable; shutting down");
            std::process::exit(1);
        }
    };

    let server = app_state.config.server.clone();
    app::serve(app::build_app(app_state), &server).await
}
