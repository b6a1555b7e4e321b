mod common;
use common::assert_empty_body;

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{test, web, App, HttpResponse};
use backend::auth::SESSION_COOKIE;
use backend::error::AppError;
use backend::middleware::session_migrator::SessionMigrator;

async fn probe() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("ok"))
}

#[actix_web::test]
async fn token_in_query_becomes_cookie_and_redirect() {
    let app = test::init_service(
        App::new()
            .wrap(SessionMigrator)
            .service(web::resource("/items").route(web::get().to(probe))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/items?jwt=abc123&other=1")
        .insert_header((header::HOST, "acme.example.com"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 307);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("Location header should be present");
    assert_eq!(location, "http://acme.example.com/items?other=1");

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("Set-Cookie header should be present");
    assert!(set_cookie.contains("auth=abc123"));
    assert!(set_cookie.contains("HttpOnly"));

    assert_empty_body(resp).await;
}

#[actix_web::test]
async fn redirect_uses_https_when_connection_is_tls() {
    let app = test::init_service(
        App::new()
            .wrap(SessionMigrator)
            .service(web::resource("/items").route(web::get().to(probe))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("https://acme.example.com/items?jwt=abc123")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 307);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(location, "https://acme.example.com/items");
}

#[actix_web::test]
async fn redirected_url_with_cookie_does_not_redirect_again() {
    let app = test::init_service(
        App::new()
            .wrap(SessionMigrator)
            .service(web::resource("/items").route(web::get().to(probe))),
    )
    .await;

    // First leg: token arrives in the query
    let req = test::TestRequest::get()
        .uri("/items?jwt=abc123&other=1")
        .insert_header((header::HOST, "acme.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 307);

    // Second leg: the clean URL plus the cookie the redirect set
    let req = test::TestRequest::get()
        .uri("/items?other=1")
        .insert_header((header::HOST, "acme.example.com"))
        .cookie(Cookie::new(SESSION_COOKIE, "abc123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn no_token_passes_through() {
    let app = test::init_service(
        App::new()
            .wrap(SessionMigrator)
            .service(web::resource("/items").route(web::get().to(probe))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/items")
        .insert_header((header::HOST, "acme.example.com"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());
}

#[actix_web::test]
async fn empty_token_passes_through() {
    let app = test::init_service(
        App::new()
            .wrap(SessionMigrator)
            .service(web::resource("/items").route(web::get().to(probe))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/items?jwt=")
        .insert_header((header::HOST, "acme.example.com"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
}
