#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::tenants::{InMemoryTenants, Tenant};

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn acme_tenant() -> Tenant {
    Tenant {
        id: 1,
        name: "Acme".to_string(),
        subdomain: "acme".to_string(),
        cname: None,
    }
}

pub fn beta_tenant() -> Tenant {
    Tenant {
        id: 2,
        name: "Beta".to_string(),
        subdomain: "beta".to_string(),
        cname: Some("feedback.beta.io".to_string()),
    }
}

/// AppState with the two fixture tenants bound and no database.
pub fn test_state() -> AppState {
    let tenants = InMemoryTenants::new()
        .with("acme.example.com", acme_tenant())
        .with("beta.example.com", beta_tenant());

    AppState::without_db(SecurityConfig::new(TEST_SECRET.as_bytes()), Arc::new(tenants))
}

/// Terminal middleware responses carry no body at all.
pub async fn assert_empty_body(resp: ServiceResponse<BoxBody>) {
    let body = test::read_body(resp).await;
    assert!(
        body.is_empty(),
        "expected empty body, got {:?}",
        std::str::from_utf8(&body)
    );
}
