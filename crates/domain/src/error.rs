//! Shared error taxonomy used across the workspace.
//!
//! Store failures fall into three kinds: the store was unreachable, the
//! store rejected a statement with a constraint violation, or something
//! else went wrong. The data-access layer classifies into these after
//! logging; the HTTP layer collapses all of them into a generic 500.
//! Sources stay boxed so this crate never names a driver type.

use std::fmt;

/// Opaque source error carried alongside each store failure.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Which store constraint rejected a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A UNIQUE or PRIMARY KEY index rejected a duplicate value.
    Unique,
    /// A reference column pointed at a row that does not exist.
    ForeignKey,
    /// A NOT NULL column received no value.
    NotNull,
    /// A CHECK constraint (bounded column length) rejected a value.
    Check,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unique => "unique",
            Self::ForeignKey => "foreign key",
            Self::NotNull => "not null",
            Self::Check => "check",
        };
        f.write_str(label)
    }
}

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum MiniBlogError {
    /// An identifier failed to parse as a UUID.
    #[error("invalid identifier")]
    InvalidId(#[from] uuid::Error),

    /// The database could not be reached.
    #[error("store connection failure")]
    Connection(#[source] BoxedSource),

    /// The store rejected a statement with a constraint violation.
    #[error("{0} constraint violation")]
    Constraint(ConstraintKind, #[source] BoxedSource),

    /// Anything else the store reported.
    #[error("unknown store error")]
    Unknown(#[source] BoxedSource),
}

impl MiniBlogError {
    /// The violated constraint, when this is a [`Constraint`](Self::Constraint) error.
    #[must_use]
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            Self::Constraint(kind, _) => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use crate::id::UserId;

    #[test]
    fn should_expose_constraint_kind_for_constraint_errors() {
        let err = MiniBlogError::Constraint(ConstraintKind::ForeignKey, "missing author".into());
        assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
    }

    #[test]
    fn should_return_none_kind_for_other_errors() {
        let err = MiniBlogError::Unknown("boom".into());
        assert_eq!(err.constraint_kind(), None);
    }

    #[test]
    fn should_convert_uuid_parse_failures() {
        let parse_err = UserId::from_str("not-a-uuid").unwrap_err();
        let err = MiniBlogError::from(parse_err);
        assert!(matches!(err, MiniBlogError::InvalidId(_)));
    }

    #[test]
    fn should_render_constraint_kind_in_message() {
        let err = MiniBlogError::Constraint(ConstraintKind::Unique, "duplicate email".into());
        assert_eq!(err.to_string(), "unique constraint violation");
    }
}
