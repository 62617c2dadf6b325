//! WebRTC signaling endpoint
//!
//! Peers in a signaling room relay opaque negotiation payloads
//! (offer/answer/ICE candidates) to each other. The hub never interprets
//! payload contents and never echoes a frame back to its sender.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures::StreamExt;
use tracing::info;

use super::state::AppState;
use super::{decode_segment, drain_outbound};
use crate::hub::{Connection, ConnectionState};

/// WebSocket upgrade handler for `GET /signal/:room_id/:peer_id`.
pub async fn signaling_handler(
    ws: WebSocketUpgrade,
    Path((room_id, peer_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let room_id = decode_segment(&room_id);
    let peer_id = decode_segment(&peer_id);
    ws.on_upgrade(move |socket| handle_socket(socket, state, room_id, peer_id))
}

/// Serve one signaling connection until it closes.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>, room_id: String, peer_id: String) {
    let mut lifecycle = ConnectionState::Connecting;
    lifecycle.advance(ConnectionState::Open);

    let (connection, outbound_rx) = Connection::channel(&peer_id, state.config.send_queue_capacity);
    let connection_id = connection.id();
    let registration = state.registry.join(&room_id, &connection);
    info!(room = %room_id, peer = %peer_id, connection = %connection_id, "signaling peer connected");

    let (sink, mut stream) = socket.split();
    let writer = tokio::spawn(drain_outbound(sink, outbound_rx));

    while let Some(received) = stream.next().await {
        match received {
            Ok(Message::Text(payload)) => {
                // Relay verbatim to all other members
                state
                    .broadcaster
                    .broadcast_excluding(&room_id, connection_id, &payload);
            }
            Ok(Message::Close(_)) | Err(_) => {
                lifecycle.advance(ConnectionState::Closing);
                break;
            }
            // Ping/pong are answered by the protocol layer; binary frames
            // are not part of the signaling surface
            Ok(_) => {}
        }
    }

    // Peer disconnect without a close frame lands here too
    lifecycle.advance(ConnectionState::Closing);
    registration.leave();
    writer.abort();
    lifecycle.advance(ConnectionState::Closed);
    info!(room = %room_id, peer = %peer_id, connection = %connection_id, "signaling peer disconnected");
}
