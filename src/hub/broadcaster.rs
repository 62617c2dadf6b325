//! Message fan-out to room members
//!
//! Broadcasts take a membership snapshot first and deliver outside the
//! registry lock, so a peer joining mid-broadcast never sees a partial
//! delivery and a slow peer cannot stall the room. A send that would
//! block is abandoned and counted as a failure; nothing is retried.

use std::sync::Arc;

use tracing::debug;

use super::connection::{ConnectionId, Frame};
use super::registry::RoomRegistry;

/// Outcome of a single fan-out. Failures are per-target conditions that
/// were logged and swallowed; they never surface to the sender.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Delivers payloads to the members of a room per room semantics.
#[derive(Clone)]
pub struct Broadcaster {
    registry: RoomRegistry,
}

impl Broadcaster {
    pub fn new(registry: RoomRegistry) -> Self {
        Self { registry }
    }

    /// Deliver `payload` to every member of `room_key` except the sender.
    /// Signaling semantics: peers relay negotiation payloads to each
    /// other, never echoing to themselves.
    pub fn broadcast_excluding(
        &self,
        room_key: &str,
        sender: ConnectionId,
        payload: &str,
    ) -> DeliveryReport {
        self.fan_out(room_key, Some(sender), payload)
    }

    /// Deliver `payload` to every member of `room_key`, including the
    /// sender. Chat semantics: the sender sees its own message echoed
    /// back with server-assigned metadata.
    pub fn broadcast_to_all(&self, room_key: &str, payload: &str) -> DeliveryReport {
        self.fan_out(room_key, None, payload)
    }

    fn fan_out(
        &self,
        room_key: &str,
        exclude: Option<ConnectionId>,
        payload: &str,
    ) -> DeliveryReport {
        let snapshot = self.registry.members(room_key);
        let frame: Frame = Arc::new(payload.to_string());

        let mut report = DeliveryReport::default();
        for member in snapshot {
            if exclude == Some(member.id()) {
                continue;
            }
            if member.try_send(Arc::clone(&frame)) {
                report.delivered += 1;
            } else {
                report.failed += 1;
                debug!(
                    room = room_key,
                    connection = %member.id(),
                    peer = member.peer(),
                    "dropped frame for unreachable or slow peer"
                );
            }
        }

        debug!(
            room = room_key,
            delivered = report.delivered,
            failed = report.failed,
            "broadcast"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::connection::Connection;
    use tokio::sync::mpsc;

    fn hub() -> (RoomRegistry, Broadcaster) {
        let registry = RoomRegistry::new();
        let broadcaster = Broadcaster::new(registry.clone());
        (registry, broadcaster)
    }

    fn join(
        registry: &RoomRegistry,
        room: &str,
        peer: &str,
    ) -> (
        ConnectionId,
        crate::hub::Registration,
        mpsc::Receiver<Frame>,
    ) {
        let (conn, rx) = Connection::channel(peer, 8);
        let id = conn.id();
        let reg = registry.join(room, &conn);
        (id, reg, rx)
    }

    #[tokio::test]
    async fn test_excluding_never_echoes_to_sender() {
        let (registry, broadcaster) = hub();
        let (a_id, _reg_a, mut rx_a) = join(&registry, "r1", "a");
        let (_b_id, _reg_b, mut rx_b) = join(&registry, "r1", "b");
        let (_c_id, _reg_c, mut rx_c) = join(&registry, "r1", "c");

        let report = broadcaster.broadcast_excluding("r1", a_id, "hello");
        assert_eq!(report.delivered, 2);
        assert_eq!(report.failed, 0);

        assert_eq!(&*rx_b.try_recv().unwrap(), "hello");
        assert_eq!(&*rx_c.try_recv().unwrap(), "hello");
        assert!(rx_a.try_recv().is_err());
        // Exactly one frame each
        assert!(rx_b.try_recv().is_err());
        assert!(rx_c.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_to_all_includes_sender() {
        let (registry, broadcaster) = hub();
        let (_a_id, _reg_a, mut rx_a) = join(&registry, "chat", "a");
        let (_b_id, _reg_b, mut rx_b) = join(&registry, "chat", "b");

        let report = broadcaster.broadcast_to_all("chat", "hi");
        assert_eq!(report.delivered, 2);

        assert_eq!(&*rx_a.try_recv().unwrap(), "hi");
        assert_eq!(&*rx_b.try_recv().unwrap(), "hi");
    }

    #[tokio::test]
    async fn test_to_all_single_member_room() {
        let (registry, broadcaster) = hub();
        let (_id, _reg, mut rx) = join(&registry, "solo", "a");

        let report = broadcaster.broadcast_to_all("solo", "echo");
        assert_eq!(report.delivered, 1);
        assert_eq!(&*rx.try_recv().unwrap(), "echo");
    }

    #[tokio::test]
    async fn test_empty_room_is_noop() {
        let (_registry, broadcaster) = hub();
        let report = broadcaster.broadcast_to_all("nowhere", "anyone?");
        assert_eq!(report, DeliveryReport::default());
    }

    #[tokio::test]
    async fn test_full_queue_counts_as_failure() {
        let (registry, broadcaster) = hub();
        // Slow peer with a single-slot queue that is already full
        let (slow, _rx_kept) = Connection::channel("slow", 1);
        let _reg_slow = registry.join("r1", &slow);
        let (fast_conn, mut rx_fast) = Connection::channel("fast", 8);
        let _reg_fast = registry.join("r1", &fast_conn);

        broadcaster.broadcast_to_all("r1", "one");
        let report = broadcaster.broadcast_to_all("r1", "two");

        // Slow peer's queue held "one"; "two" was abandoned without
        // blocking, and the fast peer still got both
        assert_eq!(report.delivered, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(&*rx_fast.try_recv().unwrap(), "one");
        assert_eq!(&*rx_fast.try_recv().unwrap(), "two");
    }

    #[tokio::test]
    async fn test_departed_receiver_counts_as_failure() {
        let (registry, broadcaster) = hub();
        let (gone, rx_gone) = Connection::channel("gone", 8);
        let _reg = registry.join("r1", &gone);
        drop(rx_gone);

        let report = broadcaster.broadcast_to_all("r1", "hello?");
        assert_eq!(report.delivered, 0);
        assert_eq!(report.failed, 1);
    }

    #[tokio::test]
    async fn test_successive_broadcasts_preserve_order_per_peer() {
        let (registry, broadcaster) = hub();
        let (sender_id, _reg_s, _rx_s) = join(&registry, "r1", "s");
        let (_peer_id, _reg_p, mut rx_p) = join(&registry, "r1", "p");

        for text in ["first", "second", "third"] {
            broadcaster.broadcast_excluding("r1", sender_id, text);
        }

        assert_eq!(&*rx_p.try_recv().unwrap(), "first");
        assert_eq!(&*rx_p.try_recv().unwrap(), "second");
        assert_eq!(&*rx_p.try_recv().unwrap(), "third");
    }
}
