//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! proxy. All types derive Serde traits for deserialization from config
//! files; credentials may instead arrive via the environment overlay
//! applied by the loader.

use serde::{Deserialize, Serialize};

/// Root configuration for the Airtable proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Upstream Airtable API settings and credentials.
    pub upstream: UpstreamConfig,

    /// Cross-origin policy for browser callers.
    pub cors: CorsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Whole-request timeout in seconds. Outer guard around the handler;
    /// must exceed the upstream timeout so upstream failures surface as
    /// the JSON error envelope rather than a bare timeout response.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Upstream Airtable API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Airtable REST API endpoint.
    pub api_url: String,

    /// Target base (dataset) identifier. The `AIRTABLE_BASE_ID`
    /// environment variable takes precedence.
    pub base_id: String,

    /// Bearer credential presented to Airtable. The `AIRTABLE_API_KEY`
    /// environment variable takes precedence. Never logged, never
    /// serialized, never returned to callers.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Table read when the request omits the `table` parameter.
    pub default_table: String,

    /// Record cap applied to every upstream query.
    pub max_records: u32,

    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.airtable.com".to_string(),
            base_id: String::new(),
            api_key: String::new(),
            default_table: "Case 1".to_string(),
            max_records: 5,
            timeout_secs: 10,
        }
    }
}

/// Cross-origin policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origin prefixes allowed to call the proxy. A request whose
    /// `origin` header (or `referer`, when `origin` is absent) does not
    /// start with one of these entries is rejected before any upstream
    /// call.
    pub allowed_origins: Vec<String>,

    /// Echo the requesting origin in `Access-Control-Allow-Origin` on
    /// the rejection path. When false the wildcard is sent instead.
    pub echo_origin_on_reject: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "https://www.scarevision.co.uk".to_string(),
                "https://scarevision.co.uk".to_string(),
            ],
            echo_origin_on_reject: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (e.g. "info" or "airtable_proxy=debug").
    /// `RUST_LOG` takes precedence when set.
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
