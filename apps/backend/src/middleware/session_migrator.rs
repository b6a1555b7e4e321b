//! Session-token migration middleware
//!
//! An external auth flow hands the session token back as a `jwt` query
//! parameter. That form must not outlive the request that carries it: this
//! stage moves the token into the `auth` cookie (HttpOnly, session-scoped),
//! strips `jwt` from the query, and 307-redirects to the clean URL. The next
//! request finds the cookie instead, so wire this stage ahead of
//! `SessionReader`.

use actix_web::body::{BoxBody, MessageBody};
use actix_web::cookie::Cookie;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{Error, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::info;
use url::form_urlencoded;

use crate::auth::{SESSION_COOKIE, TOKEN_QUERY_PARAM};
use crate::http::host::request_host;

pub struct SessionMigrator;

impl<S, B> Transform<S, ServiceRequest> for SessionMigrator
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMigratorMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMigratorMiddleware { service }))
    }
}

pub struct SessionMigratorMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionMigratorMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = match token_from_query(req.query_string()) {
            Some(token) => token,
            None => {
                let fut = self.service.call(req);
                return Box::pin(async move { Ok(fut.await?.map_into_boxed_body()) });
            }
        };

        let scheme = req.connection_info().scheme().to_string();
        let host = request_host(&req);
        let location = rebuild_url(&scheme, &host, req.path(), req.query_string());

        info!(location = %location, "migrating session token from query to cookie");

        let cookie = Cookie::build(SESSION_COOKIE, token).http_only(true).finish();

        let redirect = HttpResponse::TemporaryRedirect()
            .cookie(cookie)
            .insert_header((header::LOCATION, location))
            .finish();

        Box::pin(ready(Ok(req.into_response(redirect))))
    }
}

/// First `jwt` value in the query string, if non-empty.
fn token_from_query(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TOKEN_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Rebuild the request URL with every `jwt` pair removed, omitting the `?`
/// entirely when no query parameters remain.
fn rebuild_url(scheme: &str, host: &str, path: &str, query: &str) -> String {
    let remaining: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .filter(|(key, _)| key != TOKEN_QUERY_PARAM)
        .collect();

    let mut url = format!("{scheme}://{host}{path}");
    if !remaining.is_empty() {
        let querystring = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(remaining)
            .finish();
        url.push('?');
        url.push_str(&querystring);
    }
    url
}
