//! List endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::locale::Locale;

/// Defaults and bounds applied by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Page size used when the caller supplies none (or an invalid one).
    #[serde(default = "default_per_page")]
    pub default_per_page: u64,
    /// Upper bound for caller-supplied page sizes.
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u64,
    /// Budget for one storage round (count + slice) in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout_seconds: u64,
    /// Locale used when the request names none.
    #[serde(default)]
    pub default_locale: Locale,
}

impl ListingConfig {
    /// Storage round budget as a [`Duration`].
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_seconds)
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
            max_per_page: default_max_per_page(),
            query_timeout_seconds: default_query_timeout(),
            default_locale: Locale::default(),
        }
    }
}

fn default_per_page() -> u64 {
    15
}

fn default_max_per_page() -> u64 {
    100
}

fn default_query_timeout() -> u64 {
    10
}
