//! Core session hub: rooms, membership, and message fan-out
//!
//! The hub has no knowledge of HTTP or WebSocket framing. It deals in
//! connections (opaque handles with a bounded outbound queue), rooms
//! (named member sets), and text frames. The `api` module wires real
//! sockets onto these primitives.

pub mod broadcaster;
pub mod connection;
pub mod pairing;
pub mod registry;

pub use broadcaster::{Broadcaster, DeliveryReport};
pub use connection::{Connection, ConnectionId, ConnectionState, Frame};
pub use pairing::{session_key, SESSION_KEY_SEPARATOR};
pub use registry::{Registration, RoomMember, RoomRegistry};
