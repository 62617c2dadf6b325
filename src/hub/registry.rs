//! Room registry: maps room keys to member connections
//!
//! Rooms are created lazily on first join and deleted when the last
//! member leaves, so the map never accumulates empty entries. All
//! mutations and snapshots go through a single `RwLock`; nothing awaits
//! or does I/O while the lock is held.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::debug;

use super::connection::{Connection, ConnectionId, Frame};

/// Membership entry stored in the registry. Cloning a member clones its
/// outbound sender, so snapshots stay deliverable after the original
/// entry is removed.
#[derive(Clone)]
pub struct RoomMember {
    id: ConnectionId,
    peer: String,
    outbound: mpsc::Sender<Frame>,
}

impl RoomMember {
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Queue a frame for this member without blocking. Returns false when
    /// the member's queue is full or its receiving task is gone; the
    /// caller treats that as a delivery failure, not an error.
    pub fn try_send(&self, frame: Frame) -> bool {
        self.outbound.try_send(frame).is_ok()
    }
}

/// Maps room keys to the set of member connections and owns room
/// creation/deletion lifecycle. Cloning is cheap and shares the map.
#[derive(Clone)]
pub struct RoomRegistry {
    rooms: Arc<RwLock<HashMap<String, Vec<RoomMember>>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a connection as a member of `room_key`, creating the room
    /// if absent. A join with a connection id already present in the room
    /// replaces that membership rather than duplicating it. The returned
    /// guard removes the membership when dropped.
    pub fn join(&self, room_key: &str, connection: &Connection) -> Registration {
        let member = RoomMember {
            id: connection.id(),
            peer: connection.peer().to_string(),
            outbound: connection.outbound(),
        };
        let id = member.id;

        {
            let mut rooms = self.rooms.write();
            let members = rooms.entry(room_key.to_string()).or_default();
            members.retain(|m| m.id != id);
            members.push(member);
            debug!(room = room_key, connection = %id, members = members.len(), "joined room");
        }

        Registration {
            registry: self.clone(),
            room_key: room_key.to_string(),
            connection_id: id,
            released: false,
        }
    }

    /// Remove a membership. A no-op when the room or the membership is
    /// already gone, which keeps disconnect handling idempotent. Deletes
    /// the room entry when the last member leaves.
    fn remove(&self, room_key: &str, id: ConnectionId) {
        let mut rooms = self.rooms.write();
        let Some(members) = rooms.get_mut(room_key) else {
            return;
        };
        let before = members.len();
        members.retain(|m| m.id != id);
        if members.len() < before {
            debug!(room = room_key, connection = %id, members = members.len(), "left room");
        }
        if members.is_empty() {
            rooms.remove(room_key);
            debug!(room = room_key, "room deleted");
        }
    }

    /// Snapshot of the current members of `room_key`. Iterating the
    /// snapshot is stable even if membership changes concurrently. An
    /// absent room yields an empty vec.
    pub fn members(&self, room_key: &str) -> Vec<RoomMember> {
        self.rooms
            .read()
            .get(room_key)
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains_room(&self, room_key: &str) -> bool {
        self.rooms.read().contains_key(room_key)
    }

    /// Number of live rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.read().len()
    }

    /// Number of members in `room_key` (0 for an absent room).
    pub fn member_count(&self, room_key: &str) -> usize {
        self.rooms.read().get(room_key).map_or(0, Vec::len)
    }

    /// Total memberships across all rooms.
    pub fn connection_count(&self) -> usize {
        self.rooms.read().values().map(Vec::len).sum()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for a single room membership. Dropping it (or calling
/// [`Registration::leave`]) removes the connection from its room; the
/// second release is a no-op.
pub struct Registration {
    registry: RoomRegistry,
    room_key: String,
    connection_id: ConnectionId,
    released: bool,
}

impl Registration {
    pub fn room_key(&self) -> &str {
        &self.room_key
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    /// Explicitly remove the membership now.
    pub fn leave(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.registry.remove(&self.room_key, self.connection_id);
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.release();
    }
}
