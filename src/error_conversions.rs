//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls bridging them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::forms::books::BookFormError;
    use crate::forms::categories::CategoryFormError;
    use crate::services::errors::{INVALID_CATEGORY_MESSAGE, ServiceError};

    impl From<BookFormError> for ServiceError {
        fn from(val: BookFormError) -> Self {
            match val {
                BookFormError::UnknownCategory => {
                    ServiceError::InvalidReference(INVALID_CATEGORY_MESSAGE.to_string())
                }
                other => ServiceError::Validation(other.to_string()),
            }
        }
    }

    impl From<CategoryFormError> for ServiceError {
        fn from(val: CategoryFormError) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }
}
