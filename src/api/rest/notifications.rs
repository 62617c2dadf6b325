//! Notification endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResponse};
use crate::api::websocket::state::AppState;

/// Body of `POST /notify`. A missing `user_id` files the notification
/// under the empty owner key, i.e. a broadcast notification.
#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub message: String,
}

/// Acknowledgement returned on a successful append.
#[derive(Debug, Serialize)]
pub struct NotifyAck {
    pub status: String,
    pub id: String,
}

/// POST /notify - Append a notification record
pub async fn notify(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NotifyRequest>,
) -> impl IntoResponse {
    match state.notifications.append(request.user_id, request.message) {
        Ok(record) => (
            StatusCode::OK,
            Json(NotifyAck {
                status: "success".to_string(),
                id: record.id,
            }),
        )
            .into_response(),
        Err(err) => (StatusCode::BAD_REQUEST, Json(ApiError::from(err))).into_response(),
    }
}

/// GET /notifications - Full ordered log
pub async fn list_notifications(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let records = state.notifications.list_all();
    let total = records.len();
    Json(ApiResponse::with_total(records, total))
}

/// GET /notifications/:owner - Records filed under one owner key
pub async fn list_notifications_for(
    State(state): State<Arc<AppState>>,
    Path(owner): Path<String>,
) -> impl IntoResponse {
    // URL decode the owner key (handles spaces and special chars)
    let owner = urlencoding::decode(&owner)
        .map(|s| s.into_owned())
        .unwrap_or(owner);

    let records = state.notifications.list_for(&owner);
    let total = records.len();
    Json(ApiResponse::with_total(records, total))
}
