//! Token issuer and verifier.
//!
//! Both sides share the claim model and the injected [`SecurityConfig`];
//! they are pure functions over their inputs plus the system clock, hold no
//! mutable state and are safe to call concurrently. The `*_at` variants take
//! an explicit clock so expiry behavior is testable without sleeping.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::auth::claims::{TokenClaims, ADMIN_AUDIENCE, CLIENT_AUDIENCE};
use crate::error::TokenError;
use crate::principal::{Principal, PrincipalDescriptor};
use crate::state::security_config::SecurityConfig;

fn epoch_ms(at: SystemTime) -> Result<i64, TokenError> {
    let since_epoch = at
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TokenError::internal("system clock is set before the unix epoch"))?;
    i64::try_from(since_epoch.as_millis())
        .map_err(|_| TokenError::internal("system clock exceeds the claim timestamp range"))
}

/// Mints signed, time-bounded tokens for already-authenticated principals.
///
/// Performs no credential checking; the login collaborator hands it a
/// fully-populated [`Principal`] after the password check succeeded.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    security: SecurityConfig,
}

impl TokenIssuer {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }

    /// Issue a signed token for the principal, expiring after the
    /// configured lifetime.
    ///
    /// # Errors
    ///
    /// Only [`TokenError::Internal`]: a failure of the signing primitive or
    /// the system clock, which indicates deployment misconfiguration rather
    /// than bad input.
    pub fn issue(&self, principal: &Principal) -> Result<String, TokenError> {
        self.issue_at(principal, SystemTime::now())
    }

    /// Issue a token as of an explicit instant.
    pub fn issue_at(
        &self,
        principal: &Principal,
        now: SystemTime,
    ) -> Result<String, TokenError> {
        let issued_at_ms = epoch_ms(now)?;
        let expires_at_ms = issued_at_ms + self.security.token_lifetime_ms;
        let claims = TokenClaims::for_principal(
            principal,
            issued_at_ms,
            expires_at_ms,
            Uuid::new_v4().to_string(),
        );

        let token = encode(
            &Header::new(self.security.algorithm),
            &claims,
            &EncodingKey::from_secret(&self.security.jwt_secret),
        )
        .map_err(|e| TokenError::internal(format!("failed to sign token: {e}")))?;

        tracing::debug!(
            subject = %claims.sub,
            principal_type = %principal.principal_type(),
            jti = %claims.jti,
            "issued token"
        );
        Ok(token)
    }
}

/// Verifies token strings and extracts the principal they represent.
///
/// Every entry point re-runs the full verification pipeline: structural
/// parse, then signature (constant-time comparison inside the JWT library,
/// before any claim is trusted), then expiry. Nothing is cached across
/// calls, so repeated verification of the same token is idempotent.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    security: SecurityConfig,
}

impl TokenVerifier {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }

    /// Verify a token and extract the principal it represents.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Malformed`] for structurally invalid input, or for a
    ///   crafted token carrying both id claims
    /// - [`TokenError::InvalidSignature`] for tampering or a wrong key
    /// - [`TokenError::Expired`] once `exp` is at or past the current time
    /// - [`TokenError::UnknownPrincipalType`] when neither id claim is present
    pub fn verify(&self, token: &str) -> Result<PrincipalDescriptor, TokenError> {
        self.verify_at(token, SystemTime::now())
    }

    /// Verify a token as of an explicit instant.
    pub fn verify_at(
        &self,
        token: &str,
        now: SystemTime,
    ) -> Result<PrincipalDescriptor, TokenError> {
        let result = self
            .verified_claims_at(token, now)
            .and_then(|claims| claims.principal_descriptor());
        if let Err(ref e) = result {
            tracing::warn!(code = e.code(), "token verification failed");
        }
        result
    }

    /// Whether the token passes verification end to end.
    pub fn is_valid(&self, token: &str) -> bool {
        self.verify(token).is_ok()
    }

    /// Verify the token against a specific principal's live account state.
    ///
    /// Beyond signature and expiry, the token's subject and kind must match
    /// the principal, and the principal's current `enabled && !locked` must
    /// hold. The account check uses live state rather than the snapshot
    /// embedded at issuance; a locked or disabled account loses access this
    /// way even while its token is still unexpired.
    pub fn validate(&self, token: &str, principal: &Principal) -> bool {
        self.validate_at(token, principal, SystemTime::now())
    }

    /// Principal-bound validation as of an explicit instant.
    pub fn validate_at(&self, token: &str, principal: &Principal, now: SystemTime) -> bool {
        match self.verify_at(token, now) {
            Ok(descriptor) => {
                descriptor.username == principal.username()
                    && descriptor.principal_type == principal.principal_type()
                    && principal.can_login()
            }
            Err(_) => false,
        }
    }

    /// Username (`sub`) from a verified token.
    ///
    /// # Errors
    ///
    /// Same verification failures as [`Self::verify`].
    pub fn extract_username(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.verified_claims(token)?.sub)
    }

    /// Email from a verified token. Admin tokens carry no email; that is
    /// `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Same verification failures as [`Self::verify`].
    pub fn extract_email(&self, token: &str) -> Result<Option<String>, TokenError> {
        Ok(self.verified_claims(token)?.email)
    }

    /// Display name from a verified token (client tokens only).
    ///
    /// # Errors
    ///
    /// Same verification failures as [`Self::verify`].
    pub fn extract_full_name(&self, token: &str) -> Result<Option<String>, TokenError> {
        Ok(self.verified_claims(token)?.full_name)
    }

    /// Expiry instant of a verified token.
    ///
    /// # Errors
    ///
    /// Same verification failures as [`Self::verify`].
    pub fn extract_expiration(&self, token: &str) -> Result<SystemTime, TokenError> {
        let claims = self.verified_claims(token)?;
        let expires_at_ms = u64::try_from(claims.exp).unwrap_or(0);
        Ok(UNIX_EPOCH + Duration::from_millis(expires_at_ms))
    }

    /// Token id (`jti`) of a verified token.
    ///
    /// # Errors
    ///
    /// Same verification failures as [`Self::verify`].
    pub fn token_id_of(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.verified_claims(token)?.jti)
    }

    /// Whether the token is expired. Any verification failure counts as
    /// expired, so an unverifiable token is never treated as live.
    pub fn is_expired(&self, token: &str) -> bool {
        self.is_expired_at(token, SystemTime::now())
    }

    /// Expiry check as of an explicit instant.
    pub fn is_expired_at(&self, token: &str, now: SystemTime) -> bool {
        match (self.decode_claims(token), epoch_ms(now)) {
            (Ok(claims), Ok(now_ms)) => claims.is_expired_at(now_ms),
            _ => true,
        }
    }

    /// Time left until the token expires; zero if it is already expired or
    /// fails verification, never negative.
    pub fn remaining_lifetime(&self, token: &str) -> Duration {
        self.remaining_lifetime_at(token, SystemTime::now())
    }

    /// Remaining lifetime as of an explicit instant.
    pub fn remaining_lifetime_at(&self, token: &str, now: SystemTime) -> Duration {
        match (self.decode_claims(token), epoch_ms(now)) {
            (Ok(claims), Ok(now_ms)) if claims.exp > now_ms => {
                Duration::from_millis(u64::try_from(claims.exp - now_ms).unwrap_or(0))
            }
            _ => Duration::ZERO,
        }
    }

    fn verified_claims(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verified_claims_at(token, SystemTime::now())
    }

    /// Steps 1-3 of the verification pipeline: parse, signature, expiry.
    fn verified_claims_at(
        &self,
        token: &str,
        now: SystemTime,
    ) -> Result<TokenClaims, TokenError> {
        let claims = self.decode_claims(token)?;
        if claims.is_expired_at(epoch_ms(now)?) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// Steps 1-2: structural parse and signature check. The claims are not
    /// deserialized until the signature over the raw segments has been
    /// verified, so attacker-controlled unsigned payloads are never read.
    fn decode_claims(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(self.security.algorithm);
        // Expiry is checked by the caller at millisecond precision; the
        // library's exp validation works in whole seconds.
        validation.validate_exp = false;
        validation.set_audience(&[CLIENT_AUDIENCE, ADMIN_AUDIENCE]);

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(&self.security.jwt_secret),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::malformed(e.to_string()),
        })
    }
}
