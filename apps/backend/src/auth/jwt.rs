use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::Claims;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Session tokens live in a browser cookie, so they get a long TTL.
const SESSION_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Mint a signed session token.
pub fn mint_session_token(
    sub: &str,
    name: &str,
    email: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let claims = Claims {
        sub: sub.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        iat,
        exp: iat + SESSION_TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
}

/// Verify a session token and return its claims.
///
/// Errors:
/// - Expired token → `AppError::UnauthorizedExpiredJwt`
/// - Invalid signature or anything malformed → `AppError::UnauthorizedInvalidJwt`
pub fn decode_session_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{decode_session_token, mint_session_token, SESSION_TOKEN_TTL_SECS};
    use crate::error::AppError;
    use crate::state::security_config::SecurityConfig;

    #[test]
    fn mint_and_decode_roundtrip() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        let now = SystemTime::now();
        let token =
            mint_session_token("user-123", "Jane Doe", "jane@example.com", now, &security).unwrap();
        let claims = decode_session_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.name, "Jane Doe");
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + SESSION_TOKEN_TTL_SECS);
    }

    #[test]
    fn expired_token_is_rejected() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        // Issued far enough in the past that the TTL has elapsed
        let issued = SystemTime::now()
            - Duration::from_secs(SESSION_TOKEN_TTL_SECS as u64 + 24 * 60 * 60);
        let token =
            mint_session_token("user-456", "Old User", "old@example.com", issued, &security)
                .unwrap();

        match decode_session_token(&token, &security) {
            Err(AppError::UnauthorizedExpiredJwt) => {}
            other => panic!("Expected expired-token error, got {other:?}"),
        }
    }

    #[test]
    fn bad_signature_is_rejected() {
        // Mint with secret A
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let token = mint_session_token(
            "user-789",
            "Someone",
            "someone@example.com",
            SystemTime::now(),
            &security_a,
        )
        .unwrap();

        // Verify with secret B
        let security_b = SecurityConfig::new("secret-B".as_bytes());
        match decode_session_token(&token, &security_b) {
            Err(AppError::UnauthorizedInvalidJwt) => {}
            other => panic!("Expected invalid-token error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_token_is_rejected() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        match decode_session_token("not_even_close_to_jwt", &security) {
            Err(AppError::UnauthorizedInvalidJwt) => {}
            other => panic!("Expected invalid-token error, got {other:?}"),
        }
    }
}
