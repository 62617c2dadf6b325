//! WebSocket endpoints and per-connection plumbing
//!
//! Each accepted socket is split into a read half (driven by the
//! handler's own task) and a write half (drained by a spawned writer
//! task fed from the connection's bounded queue). Cleanup runs on every
//! exit path: the registration guard leaves the room when the handler
//! returns, however the connection died.

pub mod chat;
pub mod events;
pub mod signaling;
pub mod state;

use axum::extract::ws::{Message, WebSocket};
use futures::stream::SplitSink;
use futures::SinkExt;
use tokio::sync::mpsc;

use crate::hub::Frame;

/// Drain a connection's outbound queue into its socket. Ends when the
/// queue closes (registration released, sender halves dropped) or the
/// peer stops accepting writes.
pub(crate) async fn drain_outbound(
    mut sink: SplitSink<WebSocket, Message>,
    mut rx: mpsc::Receiver<Frame>,
) {
    while let Some(frame) = rx.recv().await {
        if sink.send(Message::Text(frame.as_ref().clone())).await.is_err() {
            break;
        }
    }
}

/// URL decode a path segment (handles spaces and special chars),
/// falling back to the raw segment if it is not valid percent-encoding.
pub(crate) fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
