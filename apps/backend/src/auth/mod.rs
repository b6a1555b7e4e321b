pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{decode_session_token, mint_session_token};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "auth";

/// Query parameter a token may transiently arrive in (external auth redirect).
/// Converted to the cookie by the `SessionMigrator` middleware on first sight.
pub const TOKEN_QUERY_PARAM: &str = "jwt";
