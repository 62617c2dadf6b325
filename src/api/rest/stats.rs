//! Hub statistics endpoint

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use super::ApiResponse;
use crate::api::websocket::state::AppState;

#[derive(Debug, Serialize)]
pub struct HubStats {
    pub rooms: usize,
    pub connections: usize,
    pub notifications: usize,
}

/// GET /stats - Current room/connection/notification counts
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = HubStats {
        rooms: state.registry.room_count(),
        connections: state.registry.connection_count(),
        notifications: state.notifications.len(),
    };
    Json(ApiResponse::new(stats))
}
