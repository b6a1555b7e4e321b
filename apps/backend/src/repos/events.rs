//! Audit-trail event repository (generic over ConnectionTrait).
//!
//! One append-only row per event. No retries at this layer; a failed insert
//! surfaces as a wrapped error to the caller.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::events_sea as events_adapter;
use crate::error::AppError;

/// Audit event domain model
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent {
    pub id: i64,
    pub tenant_id: i64,
    pub client_ip: Option<String>,
    pub name: String,
    pub created_at: OffsetDateTime,
}

pub async fn store_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tenant_id: i64,
    client_ip: Option<&str>,
    name: &str,
    occurred_at: OffsetDateTime,
) -> Result<AuditEvent, AppError> {
    let model =
        events_adapter::insert_event(conn, tenant_id, client_ip.map(str::to_string), name, occurred_at)
            .await
            .map_err(|e| AppError::db(format!("failed to insert audit event: {e}")))?;

    Ok(AuditEvent::from(model))
}

impl From<crate::entities::events::Model> for AuditEvent {
    fn from(model: crate::entities::events::Model) -> Self {
        Self {
            id: model.id,
            tenant_id: model.tenant_id,
            client_ip: model.client_ip,
            name: model.name,
            created_at: model.created_at,
        }
    }
}
