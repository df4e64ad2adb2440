use diesel::prelude::*;

use crate::domain::book::{Book, BookChanges, NewBook};
use crate::domain::types::{BookId, CategoryId};
use crate::models::book::{Book as DbBook, BookChanges as DbBookChanges, NewBook as DbNewBook};
use crate::repository::{
    BookReader, BookWriter, DieselRepository, RepositoryError, RepositoryResult,
};

fn into_domain(rows: Vec<DbBook>) -> RepositoryResult<Vec<Book>> {
    Ok(rows
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<Book>, _>>()?)
}

impl BookReader for DieselRepository {
    fn list_books(&self) -> RepositoryResult<Vec<Book>> {
        use crate::schema::books;

        let mut conn = self.conn()?;

        let rows = books::table
            .select(DbBook::as_select())
            .order(books::id.asc())
            .load::<DbBook>(&mut conn)?;

        into_domain(rows)
    }

    fn get_book_by_id(&self, id: BookId) -> RepositoryResult<Option<Book>> {
        use crate::schema::books;

        let mut conn = self.conn()?;

        let book = books::table
            .find(id.get())
            .select(DbBook::as_select())
            .first::<DbBook>(&mut conn)
            .optional()?;

        let book = book.map(TryInto::try_into).transpose()?;
        Ok(book)
    }

    fn list_books_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Book>> {
        use crate::schema::books;

        let mut conn = self.conn()?;

        let rows = books::table
            .filter(books::category_id.eq(category_id.get()))
            .select(DbBook::as_select())
            .order(books::id.asc())
            .load::<DbBook>(&mut conn)?;

        into_domain(rows)
    }
}

impl BookWriter for DieselRepository {
    fn create_book(&self, book: &NewBook) -> RepositoryResult<Book> {
        use crate::schema::books;

        let mut conn = self.conn()?;
        let db_book: DbNewBook = book.clone().into();

        let created = diesel::insert_into(books::table)
            .values(db_book)
            .returning(DbBook::as_returning())
            .get_result::<DbBook>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_book(&self, id: BookId, changes: &BookChanges) -> RepositoryResult<Book> {
        use crate::schema::books;

        let mut conn = self.conn()?;
        let db_changes: DbBookChanges = changes.clone().into();

        let updated = diesel::update(books::table.find(id.get()))
            .set(db_changes)
            .returning(DbBook::as_returning())
            .get_result::<DbBook>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn delete_book(&self, id: BookId) -> RepositoryResult<()> {
        use crate::schema::books;

        let mut conn = self.conn()?;

        let affected = diesel::delete(books::table.find(id.get())).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
