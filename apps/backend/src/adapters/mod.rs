pub mod events_sea;
pub mod tenants_sea;
