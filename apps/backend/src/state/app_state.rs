use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::tenants::TenantLookup;

use super::security_config::SecurityConfig;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent when running against in-memory tenants)
    db: Option<DatabaseConnection>,
    /// Security configuration including session-token settings
    pub security: SecurityConfig,
    /// Tenant lookup capability used by the resolver middleware
    tenants: Arc<dyn TenantLookup>,
}

impl AppState {
    /// Create a new AppState with a database connection
    pub fn new(
        db: DatabaseConnection,
        security: SecurityConfig,
        tenants: Arc<dyn TenantLookup>,
    ) -> Self {
        Self {
            db: Some(db),
            security,
            tenants,
        }
    }

    /// Create a new AppState without a database connection
    pub fn without_db(security: SecurityConfig, tenants: Arc<dyn TenantLookup>) -> Self {
        Self {
            db: None,
            security,
            tenants,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn tenants(&self) -> Arc<dyn TenantLookup> {
        Arc::clone(&self.tenants)
    }
}
