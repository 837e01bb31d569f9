use jsonwebtoken::Algorithm;

/// Default token lifetime: 48 hours, in milliseconds.
pub const DEFAULT_TOKEN_LIFETIME_MS: i64 = 172_800_000;

/// Configuration for token security settings.
///
/// Read once at startup and injected into the issuer/verifier constructors;
/// there is no runtime reconfiguration. Rotating the secret invalidates
/// every previously issued token, which is the accepted consequence of
/// having no revocation store.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared secret for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (defaults to HS256)
    pub algorithm: Algorithm,
    /// Token lifetime in milliseconds (defaults to 48 hours)
    pub token_lifetime_ms: i64,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret and default lifetime.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_lifetime_ms: DEFAULT_TOKEN_LIFETIME_MS,
        }
    }

    /// Override the token lifetime.
    pub fn with_lifetime_ms(mut self, token_lifetime_ms: i64) -> Self {
        self.token_lifetime_ms = token_lifetime_ms;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
