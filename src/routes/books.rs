use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::{MessageResponse, WriteResponse};
use crate::forms::books::BookForm;
use crate::repository::DieselRepository;
use crate::routes::auth::BasicAuthUser;
use crate::routes::{blocking_failed, error_response, parse_id};
use crate::services::books::{
    create_book as create_book_service, delete_book as delete_book_service,
    get_book as get_book_service, list_books as list_books_service,
    update_book as update_book_service,
};

const NOT_FOUND: &str = "Book not found";

#[get("/books")]
pub async fn list_books(
    _user: BasicAuthUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.into_inner();
    match web::block(move || list_books_service(repo.as_ref())).await {
        Ok(Ok(books)) => HttpResponse::Ok().json(books),
        Ok(Err(err)) => error_response(err, NOT_FOUND),
        Err(err) => blocking_failed(err),
    }
}

#[get("/books/{book_id}")]
pub async fn get_book(
    _user: BasicAuthUser,
    book_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let book_id = parse_id(&book_id);
    let repo = repo.into_inner();
    match web::block(move || get_book_service(book_id, repo.as_ref())).await {
        Ok(Ok(book)) => HttpResponse::Ok().json(book),
        Ok(Err(err)) => error_response(err, NOT_FOUND),
        Err(err) => blocking_failed(err),
    }
}

#[post("/books")]
pub async fn create_book(
    _user: BasicAuthUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BookForm>,
) -> impl Responder {
    let repo = repo.into_inner();
    match web::block(move || create_book_service(form, repo.as_ref())).await {
        Ok(Ok(book)) => HttpResponse::Ok().json(WriteResponse::new("Book created", book)),
        Ok(Err(err)) => error_response(err, NOT_FOUND),
        Err(err) => blocking_failed(err),
    }
}

#[put("/books/{book_id}")]
pub async fn update_book(
    _user: BasicAuthUser,
    book_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BookForm>,
) -> impl Responder {
    let book_id = parse_id(&book_id);
    let repo = repo.into_inner();
    match web::block(move || update_book_service(book_id, form, repo.as_ref())).await {
        Ok(Ok(book)) => HttpResponse::Ok().json(WriteResponse::new("Book updated", book)),
        Ok(Err(err)) => error_response(err, NOT_FOUND),
        Err(err) => blocking_failed(err),
    }
}

#[delete("/books/{book_id}")]
pub async fn delete_book(
    _user: BasicAuthUser,
    book_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let book_id = parse_id(&book_id);
    let repo = repo.into_inner();
    match web::block(move || delete_book_service(book_id, repo.as_ref())).await {
        Ok(Ok(())) => HttpResponse::Ok().json(MessageResponse {
            message: "Book deleted",
        }),
        Ok(Err(err)) => error_response(err, NOT_FOUND),
        Err(err) => blocking_failed(err),
    }
}
