pub mod events;
pub mod tenants;
