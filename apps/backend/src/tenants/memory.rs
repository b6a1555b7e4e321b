//! Hostname-keyed in-memory tenant source, for tests and single-host
//! deployments that don't run a tenant database.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::AppError;

use super::{Tenant, TenantLookup};

#[derive(Debug, Clone, Default)]
pub struct InMemoryTenants {
    by_host: HashMap<String, Tenant>,
}

impl InMemoryTenants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `hostname` (no port) to `tenant`.
    pub fn with(mut self, hostname: &str, tenant: Tenant) -> Self {
        self.by_host.insert(hostname.to_string(), tenant);
        self
    }
}

#[async_trait]
impl TenantLookup for InMemoryTenants {
    async fn by_domain(&self, hostname: &str) -> Result<Tenant, AppError> {
        self.by_host.get(hostname).cloned().ok_or_else(|| {
            AppError::not_found(
                "TENANT_NOT_FOUND",
                format!("no tenant bound to '{hostname}'"),
            )
        })
    }
}
