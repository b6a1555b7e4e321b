pub mod current_tenant;
pub mod current_user;

pub use current_tenant::CurrentTenant;
pub use current_user::CurrentUser;
