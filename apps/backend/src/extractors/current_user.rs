use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::claims::Claims;
use crate::error::AppError;

/// Identity of the caller, taken from the claims the `SessionReader`
/// middleware stored in request extensions.
///
/// The reader itself is fail-open; this extractor is where a route decides
/// identity is required — an anonymous request gets a 401 here. Use
/// `Option<CurrentUser>` on routes where identity is optional.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub sub: String,
    pub name: String,
    pub email: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Claims>()
                .map(|claims| CurrentUser {
                    sub: claims.sub.clone(),
                    name: claims.name.clone(),
                    email: claims.email.clone(),
                })
                .ok_or_else(AppError::unauthorized),
        )
    }
}
