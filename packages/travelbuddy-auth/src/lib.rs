#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Authentication token subsystem for the TravelBuddy backend.
//!
//! Issues and verifies signed, expiring identity tokens for two principal
//! kinds (end-user clients and administrators) with no server-side session
//! state. Collaborators outside this crate handle credential checking,
//! HTTP routing, and persistence; this crate owns the claim model, the
//! HS256 signing/verification protocol, expiry semantics, and the
//! dual-principal extraction contract.

pub mod auth;
pub mod error;
pub mod principal;
pub mod state;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use auth::bearer::extract_bearer;
pub use auth::claims::{TokenClaims, ADMIN_AUDIENCE, CLIENT_AUDIENCE, TOKEN_ISSUER};
pub use auth::jwt::{TokenIssuer, TokenVerifier};
pub use error::TokenError;
pub use principal::{AdminUser, Client, Principal, PrincipalDescriptor, PrincipalType};
pub use state::security_config::{SecurityConfig, DEFAULT_TOKEN_LIFETIME_MS};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
