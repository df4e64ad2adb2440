use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::{MessageResponse, WriteResponse};
use crate::forms::categories::CategoryForm;
use crate::repository::DieselRepository;
use crate::routes::auth::BasicAuthUser;
use crate::routes::{blocking_failed, error_response, parse_id};
use crate::services::books::list_books_by_category as list_books_by_category_service;
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    get_category as get_category_service, list_categories as list_categories_service,
    update_category as update_category_service,
};

const NOT_FOUND: &str = "Category not found";

#[get("/categories")]
pub async fn list_categories(
    _user: BasicAuthUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.into_inner();
    match web::block(move || list_categories_service(repo.as_ref())).await {
        Ok(Ok(categories)) => HttpResponse::Ok().json(categories),
        Ok(Err(err)) => error_response(err, NOT_FOUND),
        Err(err) => blocking_failed(err),
    }
}

#[get("/categories/{category_id}")]
pub async fn get_category(
    _user: BasicAuthUser,
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = parse_id(&category_id);
    let repo = repo.into_inner();
    match web::block(move || get_category_service(category_id, repo.as_ref())).await {
        Ok(Ok(category)) => HttpResponse::Ok().json(category),
        Ok(Err(err)) => error_response(err, NOT_FOUND),
        Err(err) => blocking_failed(err),
    }
}

#[post("/categories")]
pub async fn create_category(
    _user: BasicAuthUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let repo = repo.into_inner();
    match web::block(move || create_category_service(form, repo.as_ref())).await {
        Ok(Ok(category)) => {
            HttpResponse::Ok().json(WriteResponse::new("Category created", category))
        }
        Ok(Err(err)) => error_response(err, NOT_FOUND),
        Err(err) => blocking_failed(err),
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    _user: BasicAuthUser,
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let category_id = parse_id(&category_id);
    let repo = repo.into_inner();
    match web::block(move || update_category_service(category_id, form, repo.as_ref())).await {
        Ok(Ok(category)) => {
            HttpResponse::Ok().json(WriteResponse::new("Category updated", category))
        }
        Ok(Err(err)) => error_response(err, NOT_FOUND),
        Err(err) => blocking_failed(err),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    _user: BasicAuthUser,
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = parse_id(&category_id);
    let repo = repo.into_inner();
    match web::block(move || delete_category_service(category_id, repo.as_ref())).await {
        Ok(Ok(())) => HttpResponse::Ok().json(MessageResponse {
            message: "Category deleted",
        }),
        Ok(Err(err)) => error_response(err, NOT_FOUND),
        Err(err) => blocking_failed(err),
    }
}

#[get("/categories/{category_id}/books")]
pub async fn list_category_books(
    _user: BasicAuthUser,
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = parse_id(&category_id);
    let repo = repo.into_inner();
    match web::block(move || list_books_by_category_service(category_id, repo.as_ref())).await {
        Ok(Ok(books)) => HttpResponse::Ok().json(books),
        Ok(Err(err)) => error_response(err, "Category ID not found"),
        Err(err) => blocking_failed(err),
    }
}
