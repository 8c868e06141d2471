//! Configuration schema definitions.
//!
//! All types derive Serde traits so a partial TOML file only overrides what it names.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RelayConfig {
    /// Local listener settings.
    pub listener: ListenerConfig,

    /// The single upstream endpoint requests are relayed to.
    pub upstream: UpstreamConfig,

    /// The single local route that is forwarded.
    pub route: RouteConfig,

    /// CORS headers attached to every response.
    pub cors: CorsConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3123").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3123".to_string(),
        }
    }
}

/// Upstream endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Scheme and authority of the upstream, e.g. "https://dashscope.aliyuncs.com".
    pub base_url: String,

    /// Path appended to `base_url` for every forwarded request.
    pub path: String,

    /// Total timeout for one upstream exchange. `None` leaves it to the transport.
    pub timeout_secs: Option<u64>,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dashscope.aliyuncs.com".to_string(),
            path: "/api/v1/services/aigc/text-generation/generation".to_string(),
            timeout_secs: None,
        }
    }
}

/// The forwarded route.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RouteConfig {
    /// Exact request target that is relayed when the method is POST.
    pub path: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            path: "/api/dashscope/generation".to_string(),
        }
    }
}

/// CORS header values.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    /// Value of `Access-Control-Allow-Methods`.
    pub allow_methods: String,

    /// Value of `Access-Control-Allow-Headers`.
    pub allow_headers: String,

    /// Value of `Access-Control-Max-Age`, in seconds.
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_methods: "POST, OPTIONS".to_string(),
            allow_headers: "Authorization, Content-Type".to_string(),
            max_age_secs: 86_400,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
