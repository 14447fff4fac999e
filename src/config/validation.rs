//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check user list integrity (no duplicates, no empty names)
//! - Validate value ranges (timeouts > 0, bind address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn err(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(err(
            "listener.bind_address",
            format!("not a valid socket address: {}", config.listener.bind_address),
        ));
    }

    let mut seen = HashSet::new();
    for user in &config.users {
        if user.username.is_empty() {
            errors.push(err("users.username", "username must not be empty"));
        } else if !seen.insert(user.username.as_str()) {
            errors.push(err(
                "users.username",
                format!("duplicate username: {}", user.username),
            ));
        }
        if user.username.contains(':') {
            // The Basic scheme splits on the first colon.
            errors.push(err(
                "users.username",
                format!("username must not contain ':': {}", user.username),
            ));
        }
    }

    for route in &config.routes {
        if route.pattern.is_empty() {
            errors.push(err("routes.pattern", "pattern must not be empty"));
        } else if !route.pattern.starts_with('/') {
            errors.push(err(
                "routes.pattern",
                format!("pattern must start with '/': {}", route.pattern),
            ));
        }
    }

    if config.session.idle_timeout_secs == 0 {
        errors.push(err("session.idle_timeout_secs", "must be greater than zero"));
    }
    if config.session.sweep_interval_secs == 0 {
        errors.push(err("session.sweep_interval_secs", "must be greater than zero"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(err("timeouts.request_secs", "must be greater than zero"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(err(
            "observability.metrics_address",
            format!(
                "not a valid socket address: {}",
                config.observability.metrics_address
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::UserConfig;
    use crate::config::RouteRuleConfig;
    use crate::routing::Policy;

    #[test]
    fn test_demo_config_is_valid() {
        assert!(validate_config(&GatewayConfig::demo()).is_ok());
    }

    #[test]
    fn test_duplicate_usernames_rejected() {
        let mut config = GatewayConfig::demo();
        config.users.push(UserConfig {
            username: "user".to_string(),
            password: "other".to_string(),
            roles: vec![],
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("duplicate")));
    }

    #[test]
    fn test_colon_in_username_rejected() {
        let mut config = GatewayConfig::demo();
        config.users[0].username = "a:b".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_idle_timeout_rejected() {
        let mut config = GatewayConfig::demo();
        config.session.idle_timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "session.idle_timeout_secs");
    }

    #[test]
    fn test_collects_multiple_errors() {
        let mut config = GatewayConfig::demo();
        config.listener.bind_address = "nonsense".to_string();
        config.routes.push(RouteRuleConfig {
            pattern: "no-slash".to_string(),
            policy: Policy::PermitAll,
        });
        config.timeouts.request_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
