//! # miniblog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the versioned **JSON REST API** (`/api/v1/user`, `/api/v1/post`, …)
//! - Map HTTP requests into repository port calls (driving adapter)
//! - Map every failure, whatever its cause, into the generic
//!   `500 {"message":"Internal Server Error"}` response — clients never
//!   see classification details, only the logs do
//!
//! ## Dependency rule
//! Depends on `miniblog-app` (for port traits) and `miniblog-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
