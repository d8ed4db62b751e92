//! `SQLite` implementation of [`PostRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use miniblog_app::ports::PostRepository;
use miniblog_domain::error::MiniBlogError;
use miniblog_domain::id::{PostId, UserId};
use miniblog_domain::post::Post;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Post`].
struct Wrapper(Post);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let content: String = row.try_get("content")?;
        let author_id: String = row.try_get("author_id")?;

        let id = PostId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let author_id =
            UserId::from_str(&author_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Post {
            id,
            title,
            content,
            author_id,
        }))
    }
}

const INSERT: &str = "INSERT INTO posts (id, title, content, author_id) VALUES (?, ?, ?, ?)";
// rowid keeps insertion order for TEXT primary keys
const SELECT_BY_AUTHOR_ID: &str = "SELECT * FROM posts WHERE author_id = ? ORDER BY rowid";

/// `SQLite`-backed post repository.
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PostRepository for SqlitePostRepository {
    fn create(&self, post: Post) -> impl Future<Output = Result<Post, MiniBlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(post.id.to_string())
                .bind(&post.title)
                .bind(&post.content)
                .bind(post.author_id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)
                .inspect_err(|err| tracing::error!(error = %err, "error creating post"))?;

            Ok(post)
        }
    }

    fn find_by_author_id(
        &self,
        author_id: UserId,
    ) -> impl Future<Output = Result<Vec<Post>, MiniBlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_AUTHOR_ID)
                .bind(author_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)
                .inspect_err(|err| tracing::error!(error = %err, "error fetching posts"))?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
