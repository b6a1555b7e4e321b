use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::error::AppError;
use crate::tenants::Tenant;

/// The tenant that owns the current request, stored in request extensions by
/// the `TenantResolver` middleware. Requesting this extractor on a route the
/// resolver does not cover is a wiring bug, reported as an internal error.
#[derive(Debug, Clone)]
pub struct CurrentTenant(Tenant);

impl CurrentTenant {
    pub fn into_inner(self) -> Tenant {
        self.0
    }
}

impl Deref for CurrentTenant {
    type Target = Tenant;

    fn deref(&self) -> &Tenant {
        &self.0
    }
}

impl FromRequest for CurrentTenant {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Tenant>()
                .cloned()
                .map(CurrentTenant)
                .ok_or_else(|| {
                    AppError::internal(
                        "tenant missing from request context; TenantResolver not wired".to_string(),
                    )
                }),
        )
    }
}
