//! SeaORM adapter for the audit-event store.

use sea_orm::{ActiveModelTrait, ConnectionTrait, NotSet, Set};
use time::OffsetDateTime;

use crate::entities::events;

// Adapter functions return DbErr; the repos layer maps to AppError.

pub async fn insert_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tenant_id: i64,
    client_ip: Option<String>,
    name: &str,
    occurred_at: OffsetDateTime,
) -> Result<events::Model, sea_orm::DbErr> {
    let event_active = events::ActiveModel {
        id: NotSet,
        tenant_id: Set(tenant_id),
        client_ip: Set(client_ip),
        name: Set(name.to_string()),
        created_at: Set(occurred_at),
    };

    event_active.insert(conn).await
}
