//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{notifications, stats};
use super::websocket::{chat::chat_handler, signaling::signaling_handler, state::AppState};

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - the hub sits behind a browser frontend on a
    // different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // WebSocket endpoints
        .route("/signal/:room_id/:peer_id", get(signaling_handler))
        .route("/chat/:sender_id/:receiver_id", get(chat_handler))
        // Health check
        .route("/health", get(health_check))
        // Notification surface
        .route("/notify", post(notifications::notify))
        .route("/notifications", get(notifications::list_notifications))
        .route(
            "/notifications/:owner",
            get(notifications::list_notifications_for),
        )
        .route("/stats", get(stats::get_stats))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
