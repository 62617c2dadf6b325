//! Hive Hub - Real-Time Session Hub
//!
//! A WebSocket session hub that groups long-lived connections into rooms
//! (WebRTC signaling rooms, pairwise chat sessions) and fans out messages
//! among room members, plus a best-effort in-memory notification store for
//! polling consumers.
//!
//! # Features
//!
//! - **Signaling rooms**: verbatim relay of negotiation payloads to all
//!   peers except the sender
//! - **Pairwise chat**: order-independent session keys, structured message
//!   echo to every participant
//! - **Notification store**: append-only, owner-keyed, optional capacity
//! - **Thread-safe**: one task per connection, bounded per-peer send queues
//!
//! # Modules
//!
//! - `hub`: Room registry, broadcaster, pairing resolver, connection types
//! - `notify`: Notification records and store
//! - `api`: Axum HTTP router, WebSocket handlers, REST endpoints
//! - `config`: Runtime configuration
//! - `error`: Error taxonomy
//! - `utils`: Utility functions (timestamps, etc.)

pub mod api;
pub mod config;
pub mod error;
pub mod hub;
pub mod notify;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::HubConfig;
pub use error::HubError;
pub use hub::{Broadcaster, Connection, ConnectionId, DeliveryReport, Registration, RoomRegistry};
pub use notify::{NotificationRecord, NotificationStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
