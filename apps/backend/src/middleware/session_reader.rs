//! Session-token reading middleware
//!
//! Reads the `auth` cookie, verifies it, and stores the resulting claims in
//! request extensions. This stage is fail-open: a missing or invalid cookie
//! downgrades the request to anonymous instead of rejecting it — routes that
//! require identity enforce it through the `CurrentUser` extractor.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::auth::jwt::decode_session_token;
use crate::auth::SESSION_COOKIE;
use crate::state::app_state::AppState;

pub struct SessionReader;

impl<S, B> Transform<S, ServiceRequest> for SessionReader
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionReaderMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionReaderMiddleware { service }))
    }
}

pub struct SessionReaderMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionReaderMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(cookie) = req.cookie(SESSION_COOKIE) {
            match req.app_data::<web::Data<AppState>>().cloned() {
                Some(state) => match decode_session_token(cookie.value(), &state.security) {
                    Ok(claims) => {
                        // Only writer of Claims: set exactly once per request
                        req.extensions_mut().insert(claims);
                    }
                    // The token itself is never logged
                    Err(err) => {
                        warn!(error = %err, "discarding invalid session cookie");
                    }
                },
                None => {
                    warn!("AppState not available; session cookie ignored");
                }
            }
        }

        let fut = self.service.call(req);
        Box::pin(fut)
    }
}
