use actix_web::web;

pub mod auth;
pub mod health;
pub mod private;

/// Configure the tenant-scoped application routes.
///
/// In production, `main.rs` wires these behind the identity pipeline
/// (TenantResolver → SessionMigrator → SessionReader). Tests register the
/// same paths with whichever subset of the pipeline they exercise.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Identity echo: /api/me
    cfg.service(web::scope("/api").configure(private::configure_routes));

    // Session management: /auth/**
    cfg.service(web::scope("/auth").configure(auth::configure_routes));
}
