use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ENV_PREFIX: &str = "PORTFOLIO_";

/// Settings for the server inbox receiving contact messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxConfig {
    /// Upper bound on a single delivery into the inbox.
    pub delivery_timeout_ms: u64,
    /// Messages kept in memory before the oldest is dropped.
    pub inbox_capacity: usize,
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            delivery_timeout_ms: 3000,
            inbox_capacity: 500,
        }
    }
}

impl InboxConfig {
    /// Defaults, overridden by `PORTFOLIO_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));
        Self {
            delivery_timeout_ms: get("DELIVERY_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.delivery_timeout_ms),
            inbox_capacity: get("INBOX_CAPACITY")
                .and_then(|v| v.parse().ok())
                .filter(|c| *c > 0)
                .unwrap_or(defaults.inbox_capacity),
        }
    }

    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_millis(self.delivery_timeout_ms)
    }
}
