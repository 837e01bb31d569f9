//! Bearer token extraction from `Authorization` header values.
//!
//! The request-authorization collaborator parses the header value here and
//! feeds the result to the verifier; a `None` must translate to an
//! unauthorized response at the boundary.

/// Parse an `Authorization` header value of the form `Bearer <token>`.
/// Wrong scheme, missing token, or extra parts all yield `None`.
pub fn extract_bearer(auth_value: &str) -> Option<&str> {
    let parts: Vec<&str> = auth_value.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return None;
    }
    Some(parts[1])
}
