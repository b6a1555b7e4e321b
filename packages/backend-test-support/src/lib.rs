//! Backend test support utilities
//!
//! Shared helpers for backend tests; currently unified logging
//! initialization for unit and integration test binaries.

pub mod logging;
