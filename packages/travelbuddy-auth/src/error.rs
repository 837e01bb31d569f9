use thiserror::Error;

/// Failure modes of the token subsystem.
///
/// The first four variants are expected outcomes of verifying untrusted
/// input and are always surfaced as values, never panics. `Internal` is
/// reserved for failures of the signing primitive or the system clock
/// during issuance and indicates deployment misconfiguration.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Malformed token: {detail}")]
    Malformed { detail: String },
    #[error("Token signature verification failed")]
    InvalidSignature,
    #[error("Token expired")]
    Expired,
    #[error("Token does not identify a supported principal type")]
    UnknownPrincipalType,
    #[error("Internal token error: {detail}")]
    Internal { detail: String },
}

impl TokenError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Stable uppercase code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "TOKEN_MALFORMED",
            Self::InvalidSignature => "TOKEN_INVALID_SIGNATURE",
            Self::Expired => "TOKEN_EXPIRED",
            Self::UnknownPrincipalType => "TOKEN_UNKNOWN_PRINCIPAL",
            Self::Internal { .. } => "INTERNAL",
        }
    }

    /// Caller-facing detail. Every verification failure maps to the same
    /// generic message so responses never reveal which check rejected the
    /// token.
    pub fn public_detail(&self) -> &'static str {
        match self {
            Self::Internal { .. } => "Internal server error",
            _ => "Invalid or expired token",
        }
    }

    /// Whether this failure should translate to an HTTP 401-equivalent
    /// outcome at the boundary (as opposed to a server error).
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }
}
