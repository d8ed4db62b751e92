//! # miniblog-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `miniblog-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Classify database failures (connection vs constraint vs unknown)
//!
//! ## Dependency rule
//! Depends on `miniblog-app` (for port traits) and `miniblog-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod post_repo;
pub mod user_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use post_repo::SqlitePostRepository;
pub use user_repo::SqliteUserRepository;
