//! Hive Hub - Binary Entry Point
//!
//! Binds the HTTP/WebSocket listener and serves the session hub until a
//! shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use hive_hub::api::http::create_router;
use hive_hub::api::websocket::state::AppState;
use hive_hub::config::HubConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = HubConfig::from_env();
    let addr = SocketAddr::from((config.host, config.port));
    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, version = hive_hub::VERSION, "hive hub listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    // Ctrl+C / SIGINT; live connections are dropped, clients reconnect
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
