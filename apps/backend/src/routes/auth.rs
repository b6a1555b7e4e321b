use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use time::OffsetDateTime;
use tracing::warn;

use crate::auth::SESSION_COOKIE;
use crate::error::AppError;
use crate::extractors::CurrentTenant;
use crate::repos::events;
use crate::state::app_state::AppState;

/// Ends the browser session: records an audit event, expires the `auth`
/// cookie, and sends the client back to the tenant root.
async fn signout(
    req: HttpRequest,
    state: web::Data<AppState>,
    tenant: CurrentTenant,
) -> Result<HttpResponse, AppError> {
    if let Some(db) = state.db() {
        let client_ip = req
            .connection_info()
            .realip_remote_addr()
            .map(str::to_string);

        events::store_event(
            db,
            tenant.id,
            client_ip.as_deref(),
            "user_signed_out",
            OffsetDateTime::now_utc(),
        )
        .await?;
    } else {
        warn!("no database configured; sign-out not audited");
    }

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.make_removal();

    Ok(HttpResponse::TemporaryRedirect()
        .cookie(removal)
        .insert_header((header::LOCATION, "/"))
        .finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/signout").route(web::get().to(signout)));
}
