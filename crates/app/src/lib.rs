//! # miniblog-app
//!
//! Application layer — **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — create & list users
//!   - `PostRepository` — create posts & list them per author
//!
//! ## Dependency rule
//! Depends on `miniblog-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
