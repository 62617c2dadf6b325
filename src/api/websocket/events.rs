//! Wire types for WebSocket frames

use serde::{Deserialize, Serialize};

use crate::utils::time::now_rfc3339;

/// Structured chat frame delivered to every participant of a chat
/// session, including the sender. The server-assigned timestamp gives
/// all participants a consistent view of send order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender_id: String,
    pub content: String,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(sender_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            content: content.into(),
            timestamp: now_rfc3339(),
        }
    }
}
