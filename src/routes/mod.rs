//! HTTP surface: every catalog route lives under `/api`.

use actix_web::error::{BlockingError, InternalError};
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::dto::ErrorResponse;
use crate::services::ServiceError;

pub mod auth;
pub mod books;
pub mod categories;

/// Register the `/api` scope and the fallback for everything else.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(books::list_books)
            .service(books::create_book)
            .service(books::get_book)
            .service(books::update_book)
            .service(books::delete_book)
            .service(categories::list_categories)
            .service(categories::create_category)
            .service(categories::get_category)
            .service(categories::update_category)
            .service(categories::delete_category)
            .service(categories::list_category_books)
            .default_service(web::to(fallback)),
    )
    .default_service(web::to(fallback));
}

/// Headers attached to every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add((
            "Access-Control-Allow-Methods",
            "GET, POST, PUT, DELETE, OPTIONS",
        ))
        .add((
            "Access-Control-Allow-Headers",
            "Content-Type, Authorization",
        ))
}

/// Malformed bodies are answered with 400 and the decoder's message.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Preflight requests never reach a handler, so they skip authentication.
async fn fallback(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
    }
}

/// Path ids that are not positive integers cannot match a row. They become
/// `0`, which the services report as not found.
pub(crate) fn parse_id(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

/// Turn a service failure into its JSON response.
pub(crate) fn error_response(error: ServiceError, not_found: &str) -> HttpResponse {
    match error {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new(not_found)),
        ServiceError::Validation(message) | ServiceError::InvalidReference(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        ServiceError::Internal(message) => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(message))
        }
    }
}

/// Response for a `web::block` task that did not complete.
pub(crate) fn blocking_failed(err: BlockingError) -> HttpResponse {
    log::error!("Blocking task failed: {err}");
    HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string()))
}
