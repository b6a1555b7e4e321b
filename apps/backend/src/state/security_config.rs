use jsonwebtoken::Algorithm;

/// Session-token signing settings shared by minting and verification.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// HS256 with the given secret.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self::with_algorithm(jwt_secret, Algorithm::HS256)
    }

    pub fn with_algorithm(jwt_secret: impl Into<Vec<u8>>, algorithm: Algorithm) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
