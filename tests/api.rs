use actix_web::http::{Method, StatusCode, header};
use actix_web::{App, test, web};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use book_catalog::models::config::BasicAuthConfig;
use book_catalog::repository::DieselRepository;
use book_catalog::routes;
use serde_json::{Value, json};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .wrap(routes::cors_headers())
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .app_data(web::Data::new(BasicAuthConfig::default()))
                .configure(routes::configure),
        )
        .await
    };
}

fn auth() -> (header::HeaderName, String) {
    (
        header::AUTHORIZATION,
        format!("Basic {}", STANDARD.encode("admin:password123")),
    )
}

fn go_101(category_id: i64, total_page: i64) -> Value {
    json!({
        "title": "Go 101",
        "description": "Learn Go",
        "image_url": "https://example.com/go101.png",
        "release_year": 2020,
        "price": 50000,
        "total_page": total_page,
        "category_id": category_id,
    })
}

#[actix_web::test]
async fn test_requests_without_credentials_are_rejected() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/api/books").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"Authorization Required\""
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Unauthorized"}));

    let req = test::TestRequest::get()
        .uri("/api/books")
        .insert_header((
            header::AUTHORIZATION,
            format!("Basic {}", STANDARD.encode("admin:wrong")),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_preflight_skips_auth_and_carries_cors_headers() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/books")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Methods").unwrap(),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
}

#[actix_web::test]
async fn test_empty_lists_are_json_arrays() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    for uri in ["/api/books", "/api/categories"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(auth())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));
    }
}

#[actix_web::test]
async fn test_book_lifecycle() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header(auth())
        .set_json(json!({"name": "Programming"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Category created");
    let category_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/books")
        .insert_header(auth())
        .set_json(go_101(category_id, 150))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Book created");
    assert_eq!(body["data"]["thickness"], "tebal");
    assert_eq!(body["data"]["title"], "Go 101");
    let book_id = body["data"]["id"].as_i64().unwrap();
    assert!(book_id > 0);
    let created_at = body["data"]["created_at"].clone();

    let req = test::TestRequest::put()
        .uri(&format!("/api/books/{book_id}"))
        .insert_header(auth())
        .set_json(go_101(category_id, 80))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Book updated");
    assert_eq!(body["data"]["thickness"], "tipis");
    assert_eq!(body["data"]["created_at"], created_at);

    let req = test::TestRequest::get()
        .uri(&format!("/api/books/{book_id}"))
        .insert_header(auth())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_page"], 80);
    assert_eq!(body["category_id"], category_id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/categories/{category_id}/books"))
        .insert_header(auth())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{category_id}"))
        .insert_header(auth())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/books/{book_id}"))
        .insert_header(auth())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"message": "Book deleted"}));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/books/{book_id}"))
        .insert_header(auth())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Book not found"}));
}

#[actix_web::test]
async fn test_invalid_book_payloads() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header(auth())
        .set_json(json!({"name": "Programming"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let category_id = body["data"]["id"].as_i64().unwrap();

    let mut old = go_101(category_id, 150);
    old["release_year"] = json!(1975);
    let req = test::TestRequest::post()
        .uri("/api/books")
        .insert_header(auth())
        .set_json(old)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Release year must be between 1980 and 2024");

    let req = test::TestRequest::post()
        .uri("/api/books")
        .insert_header(auth())
        .set_json(go_101(category_id + 100, 150))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid category_id: category does not exist");

    let req = test::TestRequest::post()
        .uri("/api/books")
        .insert_header(auth())
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::get()
        .uri("/api/books")
        .insert_header(auth())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_category_not_found_messages() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let cases = [
        ("/api/categories/7", "Category not found"),
        ("/api/categories/abc", "Category not found"),
        ("/api/categories/7/books", "Category ID not found"),
        ("/api/books/0", "Book not found"),
    ];
    for (uri, message) in cases {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(auth())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": message}));
    }
}

#[actix_web::test]
async fn test_empty_category_lists_no_books() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header(auth())
        .set_json(json!({"name": "Poetry"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let category_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{category_id}"))
        .insert_header(auth())
        .set_json(json!({"name": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Name is required"}));

    let req = test::TestRequest::get()
        .uri(&format!("/api/categories/{category_id}/books"))
        .insert_header(auth())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_rejected_update_keeps_stored_book() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header(auth())
        .set_json(json!({"name": "Programming"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let category_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/books")
        .insert_header(auth())
        .set_json(go_101(category_id, 150))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let stored = body["data"].clone();
    let book_id = stored["id"].as_i64().unwrap();

    let mut old = go_101(category_id, 80);
    old["release_year"] = json!(1975);
    let req = test::TestRequest::put()
        .uri(&format!("/api/books/{book_id}"))
        .insert_header(auth())
        .set_json(old)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Release year must be between 1980 and 2024");

    let req = test::TestRequest::get()
        .uri(&format!("/api/books/{book_id}"))
        .insert_header(auth())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, stored);
}

#[actix_web::test]
async fn test_names_and_titles_are_stored_as_given() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header(auth())
        .set_json(json!({"name": "  Fiction  "}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["name"], "  Fiction  ");
    let category_id = body["data"]["id"].as_i64().unwrap();

    let mut padded = go_101(category_id, 150);
    padded["title"] = json!("  Go 101 ");
    let req = test::TestRequest::post()
        .uri("/api/books")
        .insert_header(auth())
        .set_json(padded)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let book_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/books/{book_id}"))
        .insert_header(auth())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["title"], "  Go 101 ");

    let req = test::TestRequest::get()
        .uri(&format!("/api/categories/{category_id}"))
        .insert_header(auth())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "  Fiction  ");
}
