//! Tenant resolution middleware
//!
//! Resolves the request's Host header (port stripped) to a tenant and stores
//! it in request extensions before any handler runs. A hostname with no
//! bound tenant terminates the request with an empty 404 — tenant isolation
//! is fail-closed and cannot be bypassed downstream.

use std::rc::Rc;

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{error, info};

use crate::http::host::{request_host, strip_port};
use crate::state::app_state::AppState;

pub struct TenantResolver;

impl<S, B> Transform<S, ServiceRequest> for TenantResolver
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = TenantResolverMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TenantResolverMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct TenantResolverMiddleware<S> {
    // Rc because the lookup is awaited before the inner service is called
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TenantResolverMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let hostname = strip_port(&request_host(&req)).to_string();

            let tenants = match req.app_data::<web::Data<AppState>>() {
                Some(state) => state.tenants(),
                None => {
                    error!("AppState not available; tenant resolution cannot run");
                    return Ok(req.into_response(HttpResponse::InternalServerError().finish()));
                }
            };

            match tenants.by_domain(&hostname).await {
                Ok(tenant) => {
                    // Only writer of Tenant: set exactly once per request
                    req.extensions_mut().insert(tenant);
                    Ok(service.call(req).await?.map_into_boxed_body())
                }
                Err(err) => {
                    info!(hostname = %hostname, error = %err, "tenant not found for hostname");
                    Ok(req.into_response(HttpResponse::NotFound().finish()))
                }
            }
        })
    }
}
