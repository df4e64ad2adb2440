use crate::db::{DbConnection, DbPool};
use crate::domain::book::{Book, BookChanges, NewBook};
use crate::domain::category::{Category, CategoryChanges, NewCategory};
use crate::domain::types::{BookId, CategoryId};

pub mod book;
pub mod category;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return it with its generated id.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Overwrite name and modification time. `NotFound` when no row matches.
    fn update_category(
        &self,
        id: CategoryId,
        changes: &CategoryChanges,
    ) -> RepositoryResult<Category>;
    /// Delete a category by id. `NotFound` when no row matches.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<()>;
}

/// Read-only operations for book entities.
pub trait BookReader {
    /// List every book.
    fn list_books(&self) -> RepositoryResult<Vec<Book>>;
    /// Retrieve a book by its identifier.
    fn get_book_by_id(&self, id: BookId) -> RepositoryResult<Option<Book>>;
    /// List the books filed under a category.
    fn list_books_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Book>>;
}

/// Write operations for book entities.
pub trait BookWriter {
    /// Persist a new book and return it with its generated id.
    ///
    /// `ConstraintViolation` when `category_id` references no category.
    fn create_book(&self, book: &NewBook) -> RepositoryResult<Book>;
    /// Overwrite every mutable column of a book.
    ///
    /// `NotFound` when no row matches, `ConstraintViolation` on a bad `category_id`.
    fn update_book(&self, id: BookId, changes: &BookChanges) -> RepositoryResult<Book>;
    /// Delete a book by id. `NotFound` when no row matches.
    fn delete_book(&self, id: BookId) -> RepositoryResult<()>;
}
