use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::category::{CategoryChanges, NewCategory};
use crate::domain::types::{CategoryName, TypeConstraintError};
use crate::forms::{constraint_error, first_message};

fn validate_name(value: &str) -> Result<(), ValidationError> {
    CategoryName::new(value).map(|_| ()).map_err(constraint_error)
}

/// JSON body accepted by category create and update.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CategoryForm {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPayload {
    pub name: CategoryName,
}

impl CategoryPayload {
    pub fn into_new_category(self) -> NewCategory {
        let now = Utc::now().naive_utc();
        NewCategory {
            name: self.name,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn into_changes(self) -> CategoryChanges {
        CategoryChanges {
            name: self.name,
            modified_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryFormError {
    #[error("{0}")]
    Validation(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(first_message(&value, &["name"]))
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<CategoryForm> for CategoryPayload {
    type Error = CategoryFormError;

    fn try_from(value: CategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: CategoryName::new(value.name)?,
        })
    }
}
