//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use miniblog_app::ports::UserRepository;
use miniblog_domain::error::MiniBlogError;
use miniblog_domain::id::UserId;
use miniblog_domain::user::User;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let age: i64 = row.try_get("age")?;
        let email: String = row.try_get("email")?;

        let id = UserId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(User {
            id,
            name,
            age,
            email,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (id, name, age, email) VALUES (?, ?, ?, ?)";
// rowid keeps insertion order for TEXT primary keys
const SELECT_ALL: &str = "SELECT * FROM users ORDER BY rowid";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, MiniBlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(user.id.to_string())
                .bind(&user.name)
                .bind(user.age)
                .bind(&user.email)
                .execute(&pool)
                .await
                .map_err(StorageError::from)
                .inspect_err(|err| tracing::error!(error = %err, "error creating user"))?;

            Ok(user)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, MiniBlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)
                .inspect_err(|err| tracing::error!(error = %err, "error fetching users"))?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
