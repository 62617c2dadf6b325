//! REST API module for HTTP endpoints
//!
//! Provides the request/response notification surface and hub stats:
//! - `POST /notify` - Append a notification
//! - `GET /notifications` - Full ordered log
//! - `GET /notifications/:owner` - Owner-scoped log
//! - `GET /stats` - Room/connection/notification counts

pub mod notifications;
pub mod stats;

use serde::Serialize;

use crate::error::HubError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }
}

impl From<HubError> for ApiError {
    fn from(err: HubError) -> Self {
        match err {
            HubError::InvalidArgument(message) => Self::bad_request(message),
        }
    }
}
