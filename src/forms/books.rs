use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::book::{BookChanges, NewBook};
use crate::domain::types::{
    BookPrice, BookTitle, CategoryId, PageCount, ReleaseYear, Thickness, TypeConstraintError,
};
use crate::forms::{constraint_error, first_message};

/// Order in which field failures are reported.
const FIELD_ORDER: [&str; 4] = ["title", "price", "total_page", "release_year"];

fn validate_title(value: &str) -> Result<(), ValidationError> {
    BookTitle::new(value).map(|_| ()).map_err(constraint_error)
}

fn validate_price(value: i32) -> Result<(), ValidationError> {
    BookPrice::new(value).map(|_| ()).map_err(constraint_error)
}

fn validate_total_page(value: i32) -> Result<(), ValidationError> {
    PageCount::new(value).map(|_| ()).map_err(constraint_error)
}

fn validate_release_year(value: i32) -> Result<(), ValidationError> {
    ReleaseYear::new(value).map(|_| ()).map_err(constraint_error)
}

/// JSON body accepted by book create and update.
///
/// Missing fields fall back to their zero value and are then rejected by
/// validation like any other bad input.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct BookForm {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[validate(custom(function = "validate_release_year"))]
    pub release_year: i32,
    #[validate(custom(function = "validate_price"))]
    pub price: i32,
    #[validate(custom(function = "validate_total_page"))]
    pub total_page: i32,
    pub category_id: i32,
}

/// Validated book fields with `thickness` already derived.
#[derive(Debug, Clone, PartialEq)]
pub struct BookPayload {
    pub title: BookTitle,
    pub description: String,
    pub image_url: String,
    pub release_year: ReleaseYear,
    pub price: BookPrice,
    pub total_page: PageCount,
    pub thickness: Thickness,
    pub category_id: CategoryId,
}

impl BookPayload {
    pub fn into_new_book(self) -> NewBook {
        let now = Utc::now().naive_utc();
        NewBook {
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            release_year: self.release_year,
            price: self.price,
            total_page: self.total_page,
            thickness: self.thickness,
            category_id: self.category_id,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn into_changes(self) -> BookChanges {
        BookChanges {
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            release_year: self.release_year,
            price: self.price,
            total_page: self.total_page,
            thickness: self.thickness,
            category_id: self.category_id,
            modified_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookFormError {
    #[error("{0}")]
    Validation(String),
    /// `category_id` cannot reference any row.
    #[error("Invalid category_id: category does not exist")]
    UnknownCategory,
}

impl From<ValidationErrors> for BookFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(first_message(&value, &FIELD_ORDER))
    }
}

impl From<TypeConstraintError> for BookFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<BookForm> for BookPayload {
    type Error = BookFormError;

    fn try_from(value: BookForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let total_page = PageCount::new(value.total_page)?;
        Ok(Self {
            title: BookTitle::new(value.title)?,
            description: value.description,
            image_url: value.image_url,
            release_year: ReleaseYear::new(value.release_year)?,
            price: BookPrice::new(value.price)?,
            total_page,
            thickness: Thickness::from(total_page),
            category_id: CategoryId::new(value.category_id)
                .map_err(|_| BookFormError::UnknownCategory)?,
        })
    }
}
