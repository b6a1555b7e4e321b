use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::{CurrentTenant, CurrentUser};

#[derive(Debug, Serialize)]
pub struct MeTenant {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub tenant: MeTenant,
    /// None for anonymous requests
    pub user: Option<CurrentUser>,
}

/// Returns the resolved tenant and, when a valid session cookie was
/// presented, the caller's identity.
async fn me(tenant: CurrentTenant, user: Option<CurrentUser>) -> Result<HttpResponse, AppError> {
    let tenant = tenant.into_inner();
    let response = MeResponse {
        tenant: MeTenant {
            id: tenant.id,
            name: tenant.name,
            subdomain: tenant.subdomain,
        },
        user,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/me").route(web::get().to(me)));
}
