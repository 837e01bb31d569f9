//! Canonical token payload.
//!
//! Claims are produced once at issuance and immutable thereafter. Wire
//! names are camelCase (`clientId`, `fullName`, ...) for compatibility
//! with existing token consumers.

use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::principal::{Principal, PrincipalDescriptor, PrincipalType};

/// Fixed application identifier carried in the `iss` claim.
pub const TOKEN_ISSUER: &str = "TravelBuddyApp";
/// Audience for end-user tokens.
pub const CLIENT_AUDIENCE: &str = "TravelBuddyClients";
/// Audience for administrative tokens.
pub const ADMIN_AUDIENCE: &str = "TravelBuddyAdministrators";

/// Claims included in our backend-issued tokens.
///
/// `iat`/`exp` are epoch milliseconds: the configured lifetime is expressed
/// in milliseconds and the expiry boundary is millisecond-exclusive, so the
/// verifier checks `exp` itself instead of relying on the JWT library's
/// seconds-granularity validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// Principal's username
    pub sub: String,
    pub iss: String,
    pub aud: String,
    /// Issued-at (milliseconds since epoch)
    pub iat: i64,
    /// Expiry (milliseconds since epoch)
    pub exp: i64,
    /// Fresh random token id, for traceability only
    pub jti: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_locked: Option<bool>,
}

impl TokenClaims {
    /// Build the claims set for a principal. Client tokens embed an
    /// at-issuance snapshot of the account state; admin tokens carry only
    /// the admin id.
    pub fn for_principal(
        principal: &Principal,
        issued_at_ms: i64,
        expires_at_ms: i64,
        token_id: String,
    ) -> Self {
        match principal {
            Principal::Client(client) => Self {
                sub: client.username.clone(),
                iss: TOKEN_ISSUER.to_string(),
                aud: CLIENT_AUDIENCE.to_string(),
                iat: issued_at_ms,
                exp: expires_at_ms,
                jti: token_id,
                client_id: Some(client.id),
                admin_id: None,
                email: Some(client.email.clone()),
                full_name: Some(client.full_name.clone()),
                enabled: Some(client.enabled),
                account_locked: Some(client.account_locked),
            },
            Principal::Admin(admin) => Self {
                sub: admin.admin_username.clone(),
                iss: TOKEN_ISSUER.to_string(),
                aud: ADMIN_AUDIENCE.to_string(),
                iat: issued_at_ms,
                exp: expires_at_ms,
                jti: token_id,
                client_id: None,
                admin_id: Some(admin.id),
                email: None,
                full_name: None,
                enabled: None,
                account_locked: None,
            },
        }
    }

    /// Extract the principal this token represents.
    ///
    /// Issuer-produced tokens always carry exactly one id claim, but a
    /// crafted token could carry both; that is rejected as malformed
    /// rather than guessing.
    pub fn principal_descriptor(&self) -> Result<PrincipalDescriptor, TokenError> {
        match (self.client_id, self.admin_id) {
            (Some(id), None) => Ok(PrincipalDescriptor {
                id,
                principal_type: PrincipalType::Client,
                username: self.sub.clone(),
            }),
            (None, Some(id)) => Ok(PrincipalDescriptor {
                id,
                principal_type: PrincipalType::Admin,
                username: self.sub.clone(),
            }),
            (None, None) => Err(TokenError::UnknownPrincipalType),
            (Some(_), Some(_)) => Err(TokenError::malformed(
                "token carries both client and admin identities",
            )),
        }
    }

    /// Expiry boundary is exclusive on the expired side: a token whose
    /// `exp` equals the current time is already expired.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.exp <= now_ms
    }
}
