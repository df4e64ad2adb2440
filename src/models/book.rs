use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::book::{
    Book as DomainBook, BookChanges as DomainBookChanges, NewBook as DomainNewBook,
};
use crate::domain::types::{
    BookPrice, BookTitle, PageCount, ReleaseYear, Thickness, TypeConstraintError,
};

/// Diesel model representing a row in the `books` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::books)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub thickness: String,
    pub category_id: i32,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Insertable form of [`Book`] used for creating new rows.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::books)]
pub struct NewBook {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub thickness: String,
    pub category_id: i32,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Changeset applied by a full book update. `created_at` is deliberately absent.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::books)]
pub struct BookChanges {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub thickness: String,
    pub category_id: i32,
    pub modified_at: NaiveDateTime,
}

impl TryFrom<Book> for DomainBook {
    type Error = TypeConstraintError;

    fn try_from(book: Book) -> Result<Self, Self::Error> {
        Ok(Self {
            id: book.id.try_into()?,
            title: BookTitle::new(book.title)?,
            description: book.description,
            image_url: book.image_url,
            release_year: ReleaseYear::new(book.release_year)?,
            price: BookPrice::new(book.price)?,
            total_page: PageCount::new(book.total_page)?,
            thickness: Thickness::try_from(book.thickness)?,
            category_id: book.category_id.try_into()?,
            created_at: book.created_at,
            modified_at: book.modified_at,
        })
    }
}

impl From<DomainNewBook> for NewBook {
    fn from(book: DomainNewBook) -> Self {
        Self {
            title: book.title.into_inner(),
            description: book.description,
            image_url: book.image_url,
            release_year: book.release_year.get(),
            price: book.price.get(),
            total_page: book.total_page.get(),
            thickness: book.thickness.into(),
            category_id: book.category_id.get(),
            created_at: book.created_at,
            modified_at: book.modified_at,
        }
    }
}

impl From<DomainBookChanges> for BookChanges {
    fn from(changes: DomainBookChanges) -> Self {
        Self {
            title: changes.title.into_inner(),
            description: changes.description,
            image_url: changes.image_url,
            release_year: changes.release_year.get(),
            price: changes.price.get(),
            total_page: changes.total_page.get(),
            thickness: changes.thickness.into(),
            category_id: changes.category_id.get(),
            modified_at: changes.modified_at,
        }
    }
}
