use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    BookId, BookPrice, BookTitle, CategoryId, PageCount, ReleaseYear, Thickness,
};

/// A book in the catalog.
///
/// This domain struct mirrors the `books` table and is independent from any
/// persistence layer representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub description: String,
    pub image_url: String,
    pub release_year: ReleaseYear,
    pub price: BookPrice,
    pub total_page: PageCount,
    /// Always derived from `total_page`.
    pub thickness: Thickness,
    pub category_id: CategoryId,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Data required to insert a new [`Book`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBook {
    pub title: BookTitle,
    pub description: String,
    pub image_url: String,
    pub release_year: ReleaseYear,
    pub price: BookPrice,
    pub total_page: PageCount,
    pub thickness: Thickness,
    pub category_id: CategoryId,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Full-field update of an existing [`Book`]. Leaves `created_at` alone.
#[derive(Debug, Clone, PartialEq)]
pub struct BookChanges {
    pub title: BookTitle,
    pub description: String,
    pub image_url: String,
    pub release_year: ReleaseYear,
    pub price: BookPrice,
    pub total_page: PageCount,
    pub thickness: Thickness,
    pub category_id: CategoryId,
    pub modified_at: NaiveDateTime,
}
