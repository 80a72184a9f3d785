//! Error types for shoplist-store
//!
//! Store failures are passed through untouched: the original `sqlx::Error`
//! stays reachable as the source. [`ShoppingListError::category`] sorts them
//! into constraint, connection and other failures without rewriting them.

use thiserror::Error;

use crate::models::ValidationError;

pub type Result<T> = std::result::Result<T, ShoppingListError>;

#[derive(Error, Debug)]
pub enum ShoppingListError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Never produced by the service; lets callers `?` a `Price::new` failure
    /// into the same error type.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Coarse classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Not-null, check, unique or value-range rejection from the store
    ConstraintViolation,
    /// Transport or pool failure between the service and the store
    ConnectionFailure,
    Other,
}

impl ShoppingListError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Database(err) => categorize_sqlx(err),
            Self::Config { .. } | Self::Validation(_) => ErrorCategory::Other,
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        self.category() == ErrorCategory::ConstraintViolation
    }

    pub fn is_connection_failure(&self) -> bool {
        self.category() == ErrorCategory::ConnectionFailure
    }
}

fn categorize_sqlx(err: &sqlx::Error) -> ErrorCategory {
    match err {
        sqlx::Error::Database(db) => {
            // SQLSTATE class 23: integrity constraint, class 22: data exception
            match db.code().as_deref().map(|code| code.get(..2)) {
                Some(Some("23")) | Some(Some("22")) => ErrorCategory::ConstraintViolation,
                _ => ErrorCategory::Other,
            }
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => ErrorCategory::ConnectionFailure,
        _ => ErrorCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn error_display() {
        let err = ShoppingListError::config("DATABASE_URL is not set");
        assert_eq!(
            err.to_string(),
            "configuration error: DATABASE_URL is not set"
        );

        let err: ShoppingListError = sqlx::Error::PoolTimedOut.into();
        assert!(err.to_string().starts_with("database error:"));
    }

    #[test]
    fn transport_failures_are_connection_failures() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        let err: ShoppingListError = sqlx::Error::Io(io_err).into();
        assert_eq!(err.category(), ErrorCategory::ConnectionFailure);
        assert!(err.is_connection_failure());

        let err: ShoppingListError = sqlx::Error::PoolClosed.into();
        assert!(err.is_connection_failure());
    }

    #[test]
    fn other_failures() {
        let err: ShoppingListError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.category(), ErrorCategory::Other);
        assert!(!err.is_constraint_violation());

        let err: ShoppingListError = ValidationError::Empty { field: "price" }.into();
        assert_eq!(err.category(), ErrorCategory::Other);
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error as _;

        let err: ShoppingListError = sqlx::Error::PoolTimedOut.into();
        assert!(err.source().is_some());
    }
}
