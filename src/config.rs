//! Runtime configuration

use std::net::{IpAddr, Ipv4Addr};

use serde::Deserialize;

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8000
}

fn default_send_queue_capacity() -> usize {
    64
}

/// Hub configuration. Every field has a default; `from_env` overrides
/// from `HIVE_HUB_*` variables so deployments need no config file.
#[derive(Clone, Debug, Deserialize)]
pub struct HubConfig {
    /// Address to bind the HTTP/WebSocket listener on.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Frames that may be pending for one peer before further deliveries
    /// to that peer are dropped.
    #[serde(default = "default_send_queue_capacity")]
    pub send_queue_capacity: usize,

    /// Maximum retained notification records; `None` keeps everything
    /// for the process lifetime.
    #[serde(default)]
    pub max_notifications: Option<usize>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            send_queue_capacity: default_send_queue_capacity(),
            max_notifications: None,
        }
    }
}

impl HubConfig {
    /// Defaults overridden by `HIVE_HUB_HOST`, `HIVE_HUB_PORT`,
    /// `HIVE_HUB_SEND_QUEUE_CAPACITY` and `HIVE_HUB_MAX_NOTIFICATIONS`.
    /// Unparseable values fall back to the default for that field.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(host) = env_parse("HIVE_HUB_HOST") {
            config.host = host;
        }
        if let Some(port) = env_parse("HIVE_HUB_PORT") {
            config.port = port;
        }
        if let Some(capacity) = env_parse("HIVE_HUB_SEND_QUEUE_CAPACITY") {
            config.send_queue_capacity = capacity;
        }
        if let Some(max) = env_parse("HIVE_HUB_MAX_NOTIFICATIONS") {
            config.max_notifications = Some(max);
        }
        config
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
