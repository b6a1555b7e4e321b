mod common;
use common::{assert_empty_body, test_state, TEST_SECRET};

use std::time::SystemTime;

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{test, web, App, HttpResponse};
use backend::auth::jwt::mint_session_token;
use backend::auth::SESSION_COOKIE;
use backend::error::AppError;
use backend::middleware::host_guard::HostGuard;
use backend::routes;
use backend::state::security_config::SecurityConfig;
use serde_json::Value;

async fn probe() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("ok"))
}

#[actix_web::test]
async fn matching_host_passes_through() {
    let guard = HostGuard::new("https://login.example.com").unwrap();
    let app = test::init_service(
        App::new()
            .wrap(guard)
            .service(web::resource("/probe").route(web::get().to(probe))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/probe")
        .insert_header((header::HOST, "login.example.com"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn other_host_is_400_with_empty_body() {
    let guard = HostGuard::new("https://login.example.com").unwrap();
    let app = test::init_service(
        App::new()
            .wrap(guard)
            .service(web::resource("/probe").route(web::get().to(probe))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/probe")
        .insert_header((header::HOST, "acme.example.com"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    assert_empty_body(resp).await;
}

#[actix_web::test]
async fn valid_session_data_does_not_bypass_the_guard() {
    let guard = HostGuard::new("https://login.example.com").unwrap();
    let app = test::init_service(
        App::new()
            .wrap(guard)
            .service(web::resource("/probe").route(web::get().to(probe))),
    )
    .await;

    let security = SecurityConfig::new(TEST_SECRET.as_bytes());
    let token =
        mint_session_token("user-1", "Jane", "jane@example.com", SystemTime::now(), &security)
            .unwrap();

    let req = test::TestRequest::get()
        .uri("/probe")
        .insert_header((header::HOST, "acme.example.com"))
        .cookie(Cookie::new(SESSION_COOKIE, token))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    assert_empty_body(resp).await;
}

/// The health endpoint is wired behind the guard in production; it answers
/// only on the configured base host.
#[actix_web::test]
async fn health_answers_only_on_the_base_host() {
    let guard = HostGuard::new("https://ops.example.com").unwrap();
    let app = test::init_service(
        App::new().app_data(web::Data::new(test_state())).service(
            web::scope("/health")
                .wrap(guard)
                .configure(routes::health::configure_routes),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::HOST, "ops.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "none");

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::HOST, "acme.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    assert_empty_body(resp).await;
}

#[actix_web::test]
async fn explicit_port_must_match_exactly() {
    let guard = HostGuard::new("http://localhost:3000").unwrap();
    let app = test::init_service(
        App::new()
            .wrap(guard)
            .service(web::resource("/probe").route(web::get().to(probe))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/probe")
        .insert_header((header::HOST, "localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let req = test::TestRequest::get()
        .uri("/probe")
        .insert_header((header::HOST, "localhost"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}
