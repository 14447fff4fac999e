//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::Policy;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Ordered route rules mapping paths to access policies.
    pub routes: Vec<RouteRuleConfig>,

    /// Users accepted by the auth gate.
    pub users: Vec<UserConfig>,

    /// Security settings (realm, CSRF header/cookie names).
    pub security: SecurityConfig,

    /// Session store lifecycle.
    pub session: SessionConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// A single route rule: path pattern plus access policy.
///
/// Patterns are exact paths, or prefixes when ending in "/*".
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteRuleConfig {
    /// Path pattern to match.
    pub pattern: String,

    /// Access policy for matching paths.
    pub policy: Policy,
}

/// A user accepted by the auth gate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserConfig {
    /// Login name, unique across the user list.
    pub username: String,

    /// Shared secret checked by the Basic scheme.
    pub password: String,

    /// Granted roles, serialized into the principal.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Security settings for the gate pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Realm announced in the Basic challenge.
    pub realm: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            realm: "gateway".to_string(),
        }
    }
}

/// Session store lifecycle configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cookie carrying the session id.
    pub cookie_name: String,

    /// Idle seconds before a session is evicted.
    pub idle_timeout_secs: u64,

    /// Sweep interval for the eviction task.
    pub sweep_interval_secs: u64,

    /// Enable the background eviction sweeper.
    pub sweeper_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "GATEWAY_SESSION".to_string(),
            idle_timeout_secs: 1800,
            sweep_interval_secs: 60,
            sweeper_enabled: true,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Address the scrape endpoint binds to.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9100".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Demo defaults matching the original application: one user and the
    /// four permit-all static pages.
    pub fn demo() -> Self {
        Self {
            routes: vec![
                RouteRuleConfig {
                    pattern: "/".to_string(),
                    policy: Policy::PermitAll,
                },
                RouteRuleConfig {
                    pattern: "/index.html".to_string(),
                    policy: Policy::PermitAll,
                },
                RouteRuleConfig {
                    pattern: "/home.html".to_string(),
                    policy: Policy::PermitAll,
                },
                RouteRuleConfig {
                    pattern: "/login.html".to_string(),
                    policy: Policy::PermitAll,
                },
            ],
            users: vec![UserConfig {
                username: "user".to_string(),
                password: "password".to_string(),
                roles: vec!["USER".to_string()],
            }],
            ..Self::default()
        }
    }
}
