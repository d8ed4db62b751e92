//! Storage ports — repository traits for persistence.

use std::future::Future;

use miniblog_domain::error::MiniBlogError;
use miniblog_domain::id::UserId;
use miniblog_domain::post::Post;
use miniblog_domain::user::User;

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Create a new user in storage.
    ///
    /// The store rejects an email that is already registered with a
    /// unique-constraint error.
    fn create(&self, user: User) -> impl Future<Output = Result<User, MiniBlogError>> + Send;

    /// Get all users, oldest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, MiniBlogError>> + Send;
}

/// Repository for persisting and querying [`Post`]s.
pub trait PostRepository {
    /// Create a new post in storage.
    ///
    /// The store rejects an author reference that does not match an
    /// existing user with a foreign-key error.
    fn create(&self, post: Post) -> impl Future<Output = Result<Post, MiniBlogError>> + Send;

    /// Get all posts written by the given author, oldest first.
    ///
    /// An author without posts (or an unknown author) yields an empty
    /// list, not an error.
    fn find_by_author_id(
        &self,
        author_id: UserId,
    ) -> impl Future<Output = Result<Vec<Post>, MiniBlogError>> + Send;
}
