//! Request payloads and their validation into domain values.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::domain::types::TypeConstraintError;

pub mod books;
pub mod categories;

/// Reports a rejected value object as a field error carrying its message.
fn constraint_error(error: TypeConstraintError) -> ValidationError {
    let mut validation = ValidationError::new("constraint");
    validation.message = Some(Cow::Owned(error.to_string()));
    validation
}

/// Picks the message of the first failing field, walking `order`.
/// `ValidationErrors` itself is unordered.
fn first_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let fields = errors.field_errors();
    order
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| errors.to_string())
}
