//! Security subsystem: the gate pipeline in front of the handlers.
//!
//! # Data Flow
//! ```text
//! Request
//!     → route policy decision (routing::RouteTable)
//!     → auth.rs (Basic credentials → Principal, or 401 + challenge)
//!     → csrf.rs (token issuance on safe methods, strict match on
//!       mutating methods, or 403)
//!     → handler
//! ```
//!
//! # Design Decisions
//! - Each gate is an Axum middleware layer returning early on rejection
//! - The auth gate is stateless per request; no session is consulted
//! - The CSRF gate implements the dual-submit-cookie pattern: the token
//!   travels out in a cookie and must come back in a request header

pub mod auth;
pub mod csrf;
pub mod error;
pub mod users;

pub use auth::auth_gate;
pub use csrf::csrf_gate;
pub use error::GateError;
pub use users::{Credentials, Principal, UserStore};
