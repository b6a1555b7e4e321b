use std::env;

use crate::error::AppError;

/// Database connection URL from the environment.
pub fn db_url() -> Result<String, AppError> {
    must_var("DATABASE_URL")
}

/// Helper to get a required environment variable
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("required environment variable {name} is not set")))
}
