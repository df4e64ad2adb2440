use thiserror::Error;

/// Reported when a book points at a category that does not exist.
pub const INVALID_CATEGORY_MESSAGE: &str = "Invalid category_id: category does not exist";
/// Reported when deleting a category that books still reference.
pub const CATEGORY_IN_USE_MESSAGE: &str = "Category is still referenced by books";

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The request payload failed validation.
    #[error("{0}")]
    Validation(String),
    /// The payload references a row that does not exist, or a row is still
    /// referenced by another one.
    #[error("{0}")]
    InvalidReference(String),
    /// The store failed; carries its message verbatim.
    #[error("{0}")]
    Internal(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
