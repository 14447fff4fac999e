//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, gate pipeline wiring)
//!     → request.rs (request ID, latency metrics)
//!     → security gates (auth, csrf)
//!     → handlers.rs / pages.rs
//!     → Send to client
//! ```

pub mod cookies;
pub mod handlers;
pub mod pages;
pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::HttpServer;
