//! Session subsystem.
//!
//! # Data Flow
//! ```text
//! Request (Cookie: GATEWAY_SESSION=<id>)
//!     → store.rs (lookup or create-on-first-touch)
//!     → CSRF gate reads/mints the session token
//!     → last_seen refreshed on every touch
//!
//! Background (optional):
//!     sweeper task → evict sessions idle past the timeout
//! ```
//!
//! # Design Decisions
//! - Sharded concurrent map; no global lock across sessions
//! - Token minting happens under the per-key entry lock, so two
//!   concurrent first-touch requests observe a single token
//! - Sessions are anonymous: Basic auth is stateless per request and
//!   the principal is never persisted here

pub mod store;

pub use store::{Session, SessionId, SessionStore};
