//! Node configuration: defaults plus environment overrides.

use crate::notifier::NOTIFICATION_TTL;
use std::time::Duration;

/// Runtime configuration for the console.
///
/// Everything has a sensible default; the store name can be overridden with
/// `VENDOR_STORE_NAME`, the same way log verbosity comes from `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Display name of the store this node serves.
    pub store_name: String,
    /// Capacity of every actor mailbox.
    pub mailbox_capacity: usize,
    /// How long a notification stays visible unless superseded.
    pub notification_ttl: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            store_name: "Green Grocer".to_string(),
            mailbox_capacity: 32,
            notification_ttl: NOTIFICATION_TTL,
        }
    }
}

impl NodeConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(name) = std::env::var("VENDOR_STORE_NAME") {
            if !name.is_empty() {
                config.store_name = name;
            }
        }
        config
    }
}
