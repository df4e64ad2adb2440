use crate::domain::book::Book;
use crate::domain::types::{BookId, CategoryId};
use crate::forms::books::{BookForm, BookPayload};
use crate::repository::{BookReader, BookWriter, CategoryReader, RepositoryError};

use super::errors::INVALID_CATEGORY_MESSAGE;
use super::{ServiceError, ServiceResult};

/// Maps a failed book write. A foreign key failure can only come from
/// `category_id` here.
fn write_error(action: &str, error: RepositoryError) -> ServiceError {
    match error {
        RepositoryError::NotFound => ServiceError::NotFound,
        RepositoryError::ConstraintViolation(_) => {
            ServiceError::InvalidReference(INVALID_CATEGORY_MESSAGE.to_string())
        }
        e => {
            log::error!("Failed to {action} book: {e}");
            ServiceError::Internal(e.to_string())
        }
    }
}

pub fn list_books<R>(repo: &R) -> ServiceResult<Vec<Book>>
where
    R: BookReader,
{
    repo.list_books().map_err(|e| {
        log::error!("Failed to list books: {e}");
        ServiceError::Internal(e.to_string())
    })
}

pub fn get_book<R>(book_id: i32, repo: &R) -> ServiceResult<Book>
where
    R: BookReader,
{
    let book_id = BookId::new(book_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_book_by_id(book_id) {
        Ok(Some(book)) => Ok(book),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get book: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

pub fn create_book<R>(form: BookForm, repo: &R) -> ServiceResult<Book>
where
    R: BookWriter,
{
    let payload = BookPayload::try_from(form)?;
    let book = payload.into_new_book();

    repo.create_book(&book).map_err(|e| write_error("create", e))
}

/// Replaces every writable field of a book.
///
/// The body is validated before the id is looked at.
pub fn update_book<R>(book_id: i32, form: BookForm, repo: &R) -> ServiceResult<Book>
where
    R: BookWriter,
{
    let payload = BookPayload::try_from(form)?;
    let book_id = BookId::new(book_id).map_err(|_| ServiceError::NotFound)?;

    repo.update_book(book_id, &payload.into_changes())
        .map_err(|e| write_error("update", e))
}

pub fn delete_book<R>(book_id: i32, repo: &R) -> ServiceResult<()>
where
    R: BookWriter,
{
    let book_id = BookId::new(book_id).map_err(|_| ServiceError::NotFound)?;

    repo.delete_book(book_id).map_err(|e| write_error("delete", e))
}

/// Books of one category. An unknown category is `NotFound`, even though
/// listing it would just be empty.
pub fn list_books_by_category<R>(category_id: i32, repo: &R) -> ServiceResult<Vec<Book>>
where
    R: CategoryReader + BookReader,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal(e.to_string()));
        }
    }

    repo.list_books_by_category(category_id).map_err(|e| {
        log::error!("Failed to list books of category {category_id}: {e}");
        ServiceError::Internal(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::Book;
    use crate::domain::category::Category;
    use crate::domain::types::{
        BookPrice, BookTitle, CategoryName, PageCount, ReleaseYear, Thickness,
    };
    use crate::repository::test::{TestRepository, epoch};

    fn category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            created_at: epoch(),
            modified_at: epoch(),
        }
    }

    fn book(id: i32, category_id: i32) -> Book {
        let total_page = PageCount::new(150).unwrap();
        Book {
            id: BookId::new(id).unwrap(),
            title: BookTitle::new("Go 101").unwrap(),
            description: "A Go book".to_string(),
            image_url: String::new(),
            release_year: ReleaseYear::new(2020).unwrap(),
            price: BookPrice::new(50000).unwrap(),
            total_page,
            thickness: Thickness::from(total_page),
            category_id: CategoryId::new(category_id).unwrap(),
            created_at: epoch(),
            modified_at: epoch(),
        }
    }

    fn form(category_id: i32, total_page: i32) -> BookForm {
        BookForm {
            title: "Rust in Action".to_string(),
            description: "Systems programming".to_string(),
            image_url: "https://example.com/rust.png".to_string(),
            release_year: 2021,
            price: 75000,
            total_page,
            category_id,
        }
    }

    #[test]
    fn create_book_derives_thickness() {
        let repo = TestRepository::new(vec![category(1, "Programming")], vec![]);

        let thick = create_book(form(1, 150), &repo).unwrap();
        assert_eq!(thick.thickness, Thickness::Tebal);
        assert!(thick.id.get() > 0);

        let thin = create_book(form(1, 80), &repo).unwrap();
        assert_eq!(thin.thickness, Thickness::Tipis);
        assert_eq!(repo.book_count(), 2);
    }

    #[test]
    fn create_book_with_unknown_category_inserts_nothing() {
        let repo = TestRepository::new(vec![category(1, "Programming")], vec![]);

        let result = create_book(form(42, 150), &repo);

        assert_eq!(
            result,
            Err(ServiceError::InvalidReference(
                INVALID_CATEGORY_MESSAGE.to_string()
            ))
        );
        assert_eq!(repo.book_count(), 0);
    }

    #[test]
    fn create_book_rejects_out_of_range_year_without_writing() {
        let repo = TestRepository::new(vec![category(1, "Programming")], vec![]);
        let mut input = form(1, 150);
        input.release_year = 1975;

        let result = create_book(input, &repo);

        assert_eq!(
            result,
            Err(ServiceError::Validation(
                "Release year must be between 1980 and 2024".to_string()
            ))
        );
        assert_eq!(repo.book_count(), 0);
    }

    #[test]
    fn get_book_returns_not_found_for_missing_and_invalid_ids() {
        let repo = TestRepository::new(vec![category(1, "Programming")], vec![book(2, 1)]);

        assert_eq!(get_book(2, &repo).unwrap().title.as_str(), "Go 101");
        assert_eq!(get_book(99, &repo), Err(ServiceError::NotFound));
        assert_eq!(get_book(0, &repo), Err(ServiceError::NotFound));
    }

    #[test]
    fn update_book_keeps_created_at() {
        let repo = TestRepository::new(vec![category(1, "Programming")], vec![book(2, 1)]);

        let updated = update_book(2, form(1, 80), &repo).unwrap();

        assert_eq!(updated.title.as_str(), "Rust in Action");
        assert_eq!(updated.thickness, Thickness::Tipis);
        assert_eq!(updated.created_at, epoch());
        assert!(updated.modified_at > epoch());
    }

    #[test]
    fn update_book_validates_before_lookup() {
        let repo = TestRepository::new(vec![category(1, "Programming")], vec![]);
        let mut input = form(1, 150);
        input.price = 0;

        assert_eq!(
            update_book(99, input, &repo),
            Err(ServiceError::Validation(
                "Price must be greater than 0".to_string()
            ))
        );
        assert_eq!(
            update_book(99, form(1, 150), &repo),
            Err(ServiceError::NotFound)
        );
    }

    #[test]
    fn rejected_update_leaves_book_unchanged() {
        let repo = TestRepository::new(vec![category(1, "Programming")], vec![book(2, 1)]);
        let before = get_book(2, &repo).unwrap();

        let mut old = form(1, 80);
        old.release_year = 1975;
        assert_eq!(
            update_book(2, old, &repo),
            Err(ServiceError::Validation(
                "Release year must be between 1980 and 2024".to_string()
            ))
        );
        assert_eq!(get_book(2, &repo), Ok(before.clone()));

        let mut free = form(1, 80);
        free.price = 0;
        assert_eq!(
            update_book(2, free, &repo),
            Err(ServiceError::Validation(
                "Price must be greater than 0".to_string()
            ))
        );
        assert_eq!(get_book(2, &repo), Ok(before));
    }

    #[test]
    fn update_book_rejects_unknown_category() {
        let repo = TestRepository::new(vec![category(1, "Programming")], vec![book(2, 1)]);

        assert_eq!(
            update_book(2, form(7, 150), &repo),
            Err(ServiceError::InvalidReference(
                INVALID_CATEGORY_MESSAGE.to_string()
            ))
        );
    }

    #[test]
    fn delete_missing_book_leaves_store_unchanged() {
        let repo = TestRepository::new(vec![category(1, "Programming")], vec![book(2, 1)]);

        assert_eq!(delete_book(3, &repo), Err(ServiceError::NotFound));
        assert_eq!(repo.book_count(), 1);

        assert_eq!(delete_book(2, &repo), Ok(()));
        assert_eq!(repo.book_count(), 0);
    }

    #[test]
    fn list_books_by_category_requires_existing_category() {
        let repo = TestRepository::new(
            vec![category(1, "Programming"), category(2, "Empty")],
            vec![book(3, 1), book(4, 1)],
        );

        assert_eq!(list_books_by_category(1, &repo).unwrap().len(), 2);
        assert_eq!(list_books_by_category(2, &repo), Ok(vec![]));
        assert_eq!(
            list_books_by_category(9, &repo),
            Err(ServiceError::NotFound)
        );
    }

    #[test]
    fn store_failures_surface_their_message() {
        let repo = TestRepository::default()
            .failing(RepositoryError::DatabaseError("disk I/O error".to_string()));

        assert_eq!(
            list_books(&repo),
            Err(ServiceError::Internal("disk I/O error".to_string()))
        );
    }
}
