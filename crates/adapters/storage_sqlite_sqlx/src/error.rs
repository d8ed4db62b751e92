//! Storage-specific error type wrapping and classifying sqlx errors.

use miniblog_domain::error::{ConstraintKind, MiniBlogError};

/// Errors originating from the `SQLite` storage layer.
///
/// Query failures are sorted into three buckets so callers can tell a
/// lost connection from a violated schema rule without inspecting
/// driver internals.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The database could not be reached or the pool gave up.
    #[error("database connection error")]
    Connection(#[source] sqlx::Error),

    /// A schema constraint rejected the statement.
    #[error("{0} constraint violation")]
    Constraint(ConstraintKind, #[source] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Any other query failure.
    #[error("database error")]
    Other(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(kind) = constraint_kind(&err) {
            Self::Constraint(kind, err)
        } else if is_connection(&err) {
            Self::Connection(err)
        } else {
            Self::Other(err)
        }
    }
}

fn constraint_kind(err: &sqlx::Error) -> Option<ConstraintKind> {
    match err.as_database_error()?.kind() {
        sqlx::error::ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
        sqlx::error::ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
        sqlx::error::ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
        sqlx::error::ErrorKind::CheckViolation => Some(ConstraintKind::Check),
        _ => None,
    }
}

fn is_connection(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

impl From<StorageError> for MiniBlogError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Connection(source) => Self::Connection(Box::new(source)),
            StorageError::Constraint(kind, source) => Self::Constraint(kind, Box::new(source)),
            err @ (StorageError::Migration(_) | StorageError::Other(_)) => {
                Self::Unknown(Box::new(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_io_failure_as_connection() {
        let err = StorageError::from(sqlx::Error::Io(std::io::Error::other("socket gone")));
        assert!(matches!(err, StorageError::Connection(_)));
    }

    #[test]
    fn should_classify_pool_timeout_as_connection() {
        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StorageError::Connection(_)));
    }

    #[test]
    fn should_classify_row_not_found_as_other() {
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::Other(_)));
    }

    #[test]
    fn should_surface_connection_failure_in_domain_error() {
        let err = MiniBlogError::from(StorageError::from(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, MiniBlogError::Connection(_)));
        assert!(err.constraint_kind().is_none());
    }

    #[test]
    fn should_surface_unclassified_failure_as_unknown_domain_error() {
        let err = MiniBlogError::from(StorageError::from(sqlx::Error::RowNotFound));
        assert!(matches!(err, MiniBlogError::Unknown(_)));
    }

    #[test]
    fn should_keep_constraint_kind_through_domain_conversion() {
        let storage = StorageError::Constraint(ConstraintKind::Unique, sqlx::Error::RowNotFound);
        let err = MiniBlogError::from(storage);
        assert_eq!(err.constraint_kind(), Some(ConstraintKind::Unique));
    }
}
