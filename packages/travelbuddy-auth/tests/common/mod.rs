#![allow(dead_code)]

// tests/common/mod.rs
use travelbuddy_auth::{
    AdminUser, Client, Principal, SecurityConfig, TokenIssuer, TokenVerifier,
};

pub mod proptest_prelude;

// Logging is auto-installed for all test binaries
#[ctor::ctor]
fn init_logging() {
    auth_test_support::logging::init();
}

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

/// Issuer/verifier pair sharing one secret.
pub fn issuer_and_verifier(security: SecurityConfig) -> (TokenIssuer, TokenVerifier) {
    (
        TokenIssuer::new(security.clone()),
        TokenVerifier::new(security),
    )
}

pub fn sample_client() -> Client {
    Client {
        id: 42,
        username: "jdoe".into(),
        email: "jdoe@example.com".into(),
        full_name: "Jane Doe".into(),
        enabled: true,
        account_locked: false,
    }
}

pub fn client_principal() -> Principal {
    Principal::Client(sample_client())
}

pub fn admin_principal() -> Principal {
    Principal::Admin(AdminUser {
        id: 3,
        admin_username: "root".into(),
        enabled: true,
        account_locked: false,
    })
}

/// Replace one character of a token segment with a different base64url
/// character. Flipping index 0 is guaranteed to change the decoded bytes;
/// for payload segments any index changes the MAC input.
pub fn flip_segment_char(segment: &str, idx: usize) -> String {
    let mut bytes = segment.as_bytes().to_vec();
    bytes[idx] = if bytes[idx] == b'A' { b'B' } else { b'A' };
    String::from_utf8(bytes).expect("segment stays ascii")
}

/// Split a compact token into its three segments.
pub fn segments(token: &str) -> (String, String, String) {
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "expected three-segment compact token");
    (parts[0].into(), parts[1].into(), parts[2].into())
}
