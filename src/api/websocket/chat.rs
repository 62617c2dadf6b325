//! Pairwise chat endpoint
//!
//! Both participants connect with their own identifier first in the
//! path; the pairing resolver folds either order into one session key.
//! Every text frame is wrapped into a structured [`ChatMessage`] and
//! delivered to all members of the session, sender included.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures::StreamExt;
use tracing::{info, warn};

use super::events::ChatMessage;
use super::state::AppState;
use super::{decode_segment, drain_outbound};
use crate::hub::{session_key, Connection, ConnectionState};

/// WebSocket upgrade handler for `GET /chat/:sender_id/:receiver_id`.
pub async fn chat_handler(
    ws: WebSocketUpgrade,
    Path((sender_id, receiver_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let sender_id = decode_segment(&sender_id);
    let receiver_id = decode_segment(&receiver_id);
    ws.on_upgrade(move |socket| handle_socket(socket, state, sender_id, receiver_id))
}

/// Serve one chat connection until it closes.
async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    sender_id: String,
    receiver_id: String,
) {
    let mut lifecycle = ConnectionState::Connecting;
    lifecycle.advance(ConnectionState::Open);

    let room_key = session_key(&sender_id, &receiver_id);
    let (connection, outbound_rx) =
        Connection::channel(&sender_id, state.config.send_queue_capacity);
    let connection_id = connection.id();
    let registration = state.registry.join(&room_key, &connection);
    info!(session = %room_key, peer = %sender_id, connection = %connection_id, "chat peer connected");

    let (sink, mut stream) = socket.split();
    let writer = tokio::spawn(drain_outbound(sink, outbound_rx));

    while let Some(received) = stream.next().await {
        match received {
            Ok(Message::Text(content)) => {
                let message = ChatMessage::new(&sender_id, content);
                match serde_json::to_string(&message) {
                    Ok(payload) => {
                        state.broadcaster.broadcast_to_all(&room_key, &payload);
                    }
                    Err(error) => {
                        warn!(session = %room_key, %error, "failed to serialize chat message");
                    }
                }
            }
            Ok(Message::Close(_)) | Err(_) => {
                lifecycle.advance(ConnectionState::Closing);
                break;
            }
            Ok(_) => {}
        }
    }

    lifecycle.advance(ConnectionState::Closing);
    registration.leave();
    writer.abort();
    lifecycle.advance(ConnectionState::Closed);
    info!(session = %room_key, peer = %sender_id, connection = %connection_id, "chat peer disconnected");
}
