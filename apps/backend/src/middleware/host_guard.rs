//! Single-host restriction middleware
//!
//! Confines an operation to one configured host (e.g. a central auth
//! endpoint that must not be reachable on per-tenant domains). Any other
//! Host header terminates the request with an empty 400.

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::error;
use url::Url;

use crate::error::AppError;
use crate::http::host::request_host;

#[derive(Clone, Debug)]
pub struct HostGuard {
    expected: String,
}

impl HostGuard {
    /// Build a guard from a base URL; requests are matched against its host
    /// component (with explicit non-default port, when present).
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let url = Url::parse(base_url)
            .map_err(|e| AppError::config(format!("invalid base URL '{base_url}': {e}")))?;
        let host = url
            .host_str()
            .ok_or_else(|| AppError::config(format!("base URL '{base_url}' has no host")))?;

        let expected = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        Ok(Self { expected })
    }
}

impl<S, B> Transform<S, ServiceRequest> for HostGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = HostGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HostGuardMiddleware {
            service,
            expected: self.expected.clone(),
        }))
    }
}

pub struct HostGuardMiddleware<S> {
    service: S,
    expected: String,
}

impl<S, B> Service<ServiceRequest> for HostGuardMiddleware<S>
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
        let actual = request_host(&req);

        if actual != self.expected {
            error!(
                actual = %actual,
                expected = %self.expected,
                "host is not valid for this operation"
            );
            return Box::pin(ready(Ok(
                req.into_response(HttpResponse::BadRequest().finish())
            )));
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_boxed_body()) })
    }
}

#[cfg(test)]
mod tests {
    use super::HostGuard;
    use crate::error::AppError;

    #[test]
    fn host_is_extracted_from_base_url() {
        let guard = HostGuard::new("https://login.example.com/some/path").unwrap();
        assert_eq!(guard.expected, "login.example.com");
    }

    #[test]
    fn explicit_port_is_kept() {
        let guard = HostGuard::new("http://localhost:3000").unwrap();
        assert_eq!(guard.expected, "localhost:3000");
    }

    #[test]
    fn unparsable_base_url_is_a_config_error() {
        match HostGuard::new("not a url") {
            Err(AppError::Config { .. }) => {}
            other => panic!("Expected config error, got {other:?}"),
        }
    }
}
