//! SeaORM-backed tenant lookup.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::tenants;
use crate::error::AppError;
use crate::tenants::{Tenant, TenantLookup};

pub struct SeaTenants {
    db: DatabaseConnection,
}

impl SeaTenants {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TenantLookup for SeaTenants {
    async fn by_domain(&self, hostname: &str) -> Result<Tenant, AppError> {
        // A tenant is reachable either through its own CNAME or through a
        // subdomain of the platform domain, in which case the first DNS label
        // is the subdomain.
        let subdomain = hostname.split('.').next().unwrap_or(hostname);

        let model = tenants::Entity::find()
            .filter(
                Condition::any()
                    .add(tenants::Column::Cname.eq(hostname))
                    .add(tenants::Column::Subdomain.eq(subdomain)),
            )
            .one(&self.db)
            .await
            .map_err(|e| AppError::db(format!("tenant lookup failed: {e}")))?
            .ok_or_else(|| {
                AppError::not_found(
                    "TENANT_NOT_FOUND",
                    format!("no tenant bound to '{hostname}'"),
                )
            })?;

        Ok(Tenant::from(model))
    }
}

impl From<tenants::Model> for Tenant {
    fn from(model: tenants::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            subdomain: model.subdomain,
            cname: model.cname,
        }
    }
}
