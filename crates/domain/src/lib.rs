//! # miniblog-domain
//!
//! Pure domain model for the miniblog backend.
//!
//! ## Responsibilities
//! - Typed identifiers — random-token UUIDs for users and posts
//! - Define **Users** (authors: name, age, unique email)
//! - Define **Posts** (title, content, author reference)
//! - Define the shared error taxonomy the other layers classify into
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod post;
pub mod user;
