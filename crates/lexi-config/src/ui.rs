use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct UiConfig {
    /// How long a notification stays visible before auto-dismissal
    pub notification_timeout_ms: u64,
}

impl UiConfig {
    pub fn new() -> Self {
        let notification_timeout_ms = env::var("LEXI_NOTIFICATION_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000); // 3 seconds default

        Self {
            notification_timeout_ms,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}
