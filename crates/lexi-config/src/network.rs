use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Base path of the dictionary REST API
    pub api_base_url: String,
    /// Per-request timeout for gateway calls
    pub request_timeout_ms: u64,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let api_base_url =
            env::var("LEXI_API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000/api".to_string());

        let request_timeout_ms = env::var("LEXI_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10000); // 10 seconds default

        Self {
            api_base_url,
            request_timeout_ms,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new()
    }
}
