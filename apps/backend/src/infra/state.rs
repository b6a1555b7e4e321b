use std::sync::Arc;

use crate::adapters::tenants_sea::SeaTenants;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;
use crate::tenants::TenantLookup;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_url: Option<String>,
    tenants: Option<Arc<dyn TenantLookup>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db_url: None,
            tenants: None,
        }
    }

    pub fn with_db_url(mut self, url: String) -> Self {
        self.db_url = Some(url);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    /// Override the tenant source (defaults to the database-backed lookup
    /// when a database is configured).
    pub fn with_tenants(mut self, tenants: Arc<dyn TenantLookup>) -> Self {
        self.tenants = Some(tenants);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let db = match self.db_url {
            Some(url) => Some(connect_db(&url).await?),
            None => None,
        };

        match (self.tenants, db) {
            (Some(tenants), Some(db)) => Ok(AppState::new(db, self.security_config, tenants)),
            (Some(tenants), None) => Ok(AppState::without_db(self.security_config, tenants)),
            (None, Some(db)) => {
                let tenants = Arc::new(SeaTenants::new(db.clone()));
                Ok(AppState::new(db, self.security_config, tenants))
            }
            (None, None) => Err(AppError::config(
                "no tenant source configured: set a database URL or provide a tenant lookup"
                    .to_string(),
            )),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
