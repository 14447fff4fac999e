//! Authentication + CSRF gateway library.
//!
//! A small HTTP service that places an explicit gate pipeline in front
//! of its handlers: route policy → Basic auth → CSRF token check.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod security;
pub mod session;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
