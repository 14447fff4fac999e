//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → rules.rs (ordered RouteRule scan)
//!     → Return: Policy (PermitAll | RequireAuth)
//!
//! Rule Compilation (at startup):
//!     RouteRuleConfig[]
//!     → Compile patterns (exact or trailing "/*" prefix)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Rules compiled at startup, immutable at runtime
//! - No regex (exact and prefix matching only)
//! - First match wins, in configuration order
//! - Unmatched paths default to RequireAuth, never to PermitAll

pub mod rules;

pub use rules::{Policy, RouteRule, RouteTable};
