//! Connection handles and lifecycle states

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

/// Frames are shared across fan-out targets without copying the payload.
pub type Frame = Arc<String>;

/// Process-wide connection id counter. Ids are never reused within a
/// process lifetime, so a stale id can never match a newer connection.
static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a single connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    fn next() -> Self {
        Self(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// A single bidirectional endpoint as seen by the hub: an identity, a peer
/// identifier, and a bounded outbound queue. The queue is drained by the
/// connection's own writer task, so sends to one peer never interleave.
pub struct Connection {
    id: ConnectionId,
    peer: String,
    outbound: mpsc::Sender<Frame>,
}

impl Connection {
    /// Wrap an existing outbound sender into a connection handle.
    pub fn new(peer: impl Into<String>, outbound: mpsc::Sender<Frame>) -> Self {
        Self {
            id: ConnectionId::next(),
            peer: peer.into(),
            outbound,
        }
    }

    /// Create a connection together with the receiving half of its
    /// outbound queue. `capacity` bounds how many frames may be pending
    /// for this peer before further deliveries are dropped.
    pub fn channel(peer: impl Into<String>, capacity: usize) -> (Self, mpsc::Receiver<Frame>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(peer, tx), rx)
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    pub(crate) fn outbound(&self) -> mpsc::Sender<Frame> {
        self.outbound.clone()
    }
}

/// Lifecycle of a connection. Transitions only move forward; a closed
/// connection never reopens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// Handshake in flight, not yet registered anywhere.
    Connecting,
    /// Handshake accepted; may be registered in a room and exchange frames.
    Open,
    /// Close frame, receive error, or peer disconnect observed.
    Closing,
    /// Cleanup complete, membership released.
    Closed,
}

impl ConnectionState {
    fn rank(self) -> u8 {
        match self {
            Self::Connecting => 0,
            Self::Open => 1,
            Self::Closing => 2,
            Self::Closed => 3,
        }
    }

    /// Advance to `next` if it is a forward transition. Returns whether
    /// the transition was taken; backward transitions leave the state
    /// untouched.
    pub fn advance(&mut self, next: ConnectionState) -> bool {
        if next.rank() > self.rank() {
            *self = next;
            true
        } else {
            false
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Closed
    }
}
