//! Route rule matching.
//!
//! # Responsibilities
//! - Match request paths against configured patterns (case-sensitive)
//! - Resolve each path to exactly one access policy
//!
//! # Design Decisions
//! - A pattern is either an exact path or a trailing "/*" prefix
//! - Empty rule set = everything requires authentication
//! - O(n) scan over the rule list; rule counts here are tiny

use serde::{Deserialize, Serialize};

use crate::config::RouteRuleConfig;

/// Access policy attached to a route rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Reachable without authentication.
    PermitAll,
    /// Auth gate must accept the request first.
    RequireAuth,
}

/// A compiled path pattern plus its policy.
#[derive(Debug, Clone)]
pub struct RouteRule {
    pattern: Pattern,
    policy: Policy,
}

#[derive(Debug, Clone)]
enum Pattern {
    Exact(String),
    Prefix(String),
}

impl RouteRule {
    /// Compile a rule from its config form.
    ///
    /// A pattern ending in "/*" matches the prefix before the star;
    /// anything else matches exactly.
    pub fn compile(pattern: &str, policy: Policy) -> Self {
        let pattern = match pattern.strip_suffix("/*") {
            Some(prefix) => Pattern::Prefix(format!("{}/", prefix)),
            None => Pattern::Exact(pattern.to_string()),
        };
        Self { pattern, policy }
    }

    fn matches(&self, path: &str) -> bool {
        match &self.pattern {
            Pattern::Exact(p) => path == p,
            Pattern::Prefix(p) => path.starts_with(p.as_str()),
        }
    }
}

/// Immutable, ordered set of route rules.
///
/// Built once at startup and shared by reference into the gate pipeline.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    /// Compile the configured rules in order.
    pub fn from_config(rules: &[RouteRuleConfig]) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|r| RouteRule::compile(&r.pattern, r.policy))
                .collect(),
        }
    }

    /// Resolve the policy for a request path. First match wins;
    /// unmatched paths require authentication.
    pub fn decide(&self, path: &str) -> Policy {
        self.rules
            .iter()
            .find(|r| r.matches(path))
            .map(|r| r.policy)
            .unwrap_or(Policy::RequireAuth)
    }
}
