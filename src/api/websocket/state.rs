//! Shared application state

use std::sync::Arc;

use crate::config::HubConfig;
use crate::hub::{Broadcaster, RoomRegistry};
use crate::notify::NotificationStore;

/// Shared application state handed to every handler. Built once at
/// startup; no ambient globals.
pub struct AppState {
    pub registry: RoomRegistry,
    pub broadcaster: Broadcaster,
    pub notifications: Arc<NotificationStore>,
    pub config: HubConfig,
}

impl AppState {
    pub fn new(config: HubConfig) -> Self {
        let registry = RoomRegistry::new();
        let broadcaster = Broadcaster::new(registry.clone());
        let notifications = Arc::new(NotificationStore::with_capacity(config.max_notifications));

        Self {
            registry,
            broadcaster,
            notifications,
            config,
        }
    }
}
