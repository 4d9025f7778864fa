//! Polymarket client configuration.

use serde::Deserialize;

/// `[polymarket]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PolymarketConfig {
    /// Gamma API base URL.
    #[serde(default = "default_gamma_api_url")]
    pub gamma_api_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_gamma_api_url() -> String {
    "https://gamma-api.polymarket.com".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for PolymarketConfig {
    fn default() -> Self {
        Self {
            gamma_api_url: default_gamma_api_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
