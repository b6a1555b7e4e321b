#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractors;
pub mod http;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;
pub mod tenants;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::jwt::{decode_session_token, mint_session_token};
pub use auth::{Claims, SESSION_COOKIE, TOKEN_QUERY_PARAM};
pub use error::AppError;
pub use extractors::{CurrentTenant, CurrentUser};
pub use infra::db::connect_db;
pub use infra::state::build_state;
pub use middleware::cors::cors_middleware;
pub use middleware::host_guard::HostGuard;
pub use middleware::request_trace::RequestTrace;
pub use middleware::session_migrator::SessionMigrator;
pub use middleware::session_reader::SessionReader;
pub use middleware::tenant_resolver::TenantResolver;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
pub use tenants::{InMemoryTenants, Tenant, TenantLookup};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
