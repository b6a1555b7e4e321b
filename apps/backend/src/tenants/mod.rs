//! Tenant domain model and the lookup capability consumed by the
//! `TenantResolver` middleware.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub mod memory;

pub use memory::InMemoryTenants;

/// An isolated customer account, identified by its bound hostnames.
/// Read-only from this service's perspective; looked up once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
    pub cname: Option<String>,
}

/// Hostname → tenant resolution capability.
///
/// Implementations must be deterministic and read-only. `hostname` arrives
/// with any `:port` suffix already stripped.
#[async_trait]
pub trait TenantLookup: Send + Sync {
    async fn by_domain(&self, hostname: &str) -> Result<Tenant, AppError>;
}
