//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! function adapter. All types derive Serde traits for deserialization
//! from config files, and every section has defaults so the binary runs
//! without any file at all.

use serde::{Deserialize, Serialize};

/// Root configuration for the function adapter.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FunctionConfig {
    /// Listener configuration (bind address, concurrency limit).
    pub listener: ListenerConfig,

    /// Function identity and route prefix.
    pub function: FunctionSettings,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// HTTP handling limits.
    pub http: HttpConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration (server mode only).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum concurrent in-flight requests (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_connections: 1024,
        }
    }
}

/// Function identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FunctionSettings {
    /// Service name reported by the health route and the greeting.
    pub service_name: String,

    /// Path prefix the canned routes are served under. Empty means the
    /// routes live at the root; a deployment typically sets this to its
    /// deployment path (e.g., "/my-app").
    pub route_prefix: String,
}

impl Default for FunctionSettings {
    fn default() -> Self {
        Self {
            service_name: "edgefn".to_string(),
            route_prefix: String::new(),
        }
    }
}

/// Timeout configuration (server mode only; the platform owns one-shot
/// timeouts).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// HTTP handling limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Maximum request body size in bytes; larger bodies answer 413.
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Whether to expose Prometheus metrics (server mode only).
    pub metrics_enabled: bool,

    /// Address for the metrics scrape endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let config: FunctionConfig = toml::from_str(
            r#"
            [function]
            service_name = "demo-app"
            route_prefix = "/demo"
            "#,
        )
        .expect("minimal config parses");

        assert_eq!(config.function.service_name, "demo-app");
        assert_eq!(config.function.route_prefix, "/demo");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.http.max_body_bytes, 1024 * 1024);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn empty_config_is_the_default() {
        let config: FunctionConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config.function.service_name, "edgefn");
        assert!(config.function.route_prefix.is_empty());
    }
}
