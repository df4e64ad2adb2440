use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Typed outcome of a failed gateway operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No row matched the requested identifier.
    #[error("record not found")]
    NotFound,
    /// A foreign key reference was rejected by the store.
    #[error("{0}")]
    ConstraintViolation(String),
    /// A stored row could not be mapped into a domain value.
    #[error("{0}")]
    ValidationError(String),
    /// No connection could be checked out of the pool.
    #[error("{0}")]
    ConnectionError(String),
    /// Any other failure reported by the store.
    #[error("{0}")]
    DatabaseError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                Self::ConstraintViolation(info.message().to_string())
            }
            // Older SQLite builds report FK failures with the generic constraint code.
            DieselError::DatabaseError(_, info)
                if info.message().contains("FOREIGN KEY constraint failed") =>
            {
                Self::ConstraintViolation(info.message().to_string())
            }
            other => Self::DatabaseError(other.to_string()),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(value: PoolError) -> Self {
        Self::ConnectionError(value.to_string())
    }
}
