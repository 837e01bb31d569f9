//! Principal model: the authenticated identities a token can represent.
//!
//! A token is issued for exactly one principal kind. Representing the two
//! kinds as a sum type keeps "exactly one of clientId/adminId" a structural
//! invariant instead of a runtime convention.

use std::fmt;

/// An end-user account as supplied by the login collaborator after
/// credential checking. Account-state fields are a point-in-time snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub enabled: bool,
    pub account_locked: bool,
}

/// An administrative account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub id: i64,
    pub admin_username: String,
    pub enabled: bool,
    pub account_locked: bool,
}

/// The identity a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Client(Client),
    Admin(AdminUser),
}

impl Principal {
    pub fn id(&self) -> i64 {
        match self {
            Self::Client(client) => client.id,
            Self::Admin(admin) => admin.id,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Self::Client(client) => &client.username,
            Self::Admin(admin) => &admin.admin_username,
        }
    }

    pub fn principal_type(&self) -> PrincipalType {
        match self {
            Self::Client(_) => PrincipalType::Client,
            Self::Admin(_) => PrincipalType::Admin,
        }
    }

    /// Whether the account may authenticate right now (live state, not the
    /// snapshot embedded in any previously issued token).
    pub fn can_login(&self) -> bool {
        match self {
            Self::Client(client) => client.enabled && !client.account_locked,
            Self::Admin(admin) => admin.enabled && !admin.account_locked,
        }
    }
}

/// Discriminator for the two principal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrincipalType {
    Client,
    Admin,
}

impl PrincipalType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "CLIENT",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for PrincipalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identity extracted from a verified token, handed to downstream
/// business logic by the request-authorization collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalDescriptor {
    pub id: i64,
    pub principal_type: PrincipalType,
    pub username: String,
}

impl PrincipalDescriptor {
    pub fn is_client(&self) -> bool {
        self.principal_type == PrincipalType::Client
    }

    pub fn is_admin(&self) -> bool {
        self.principal_type == PrincipalType::Admin
    }
}

impl fmt::Display for PrincipalDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} ({})",
            self.principal_type, self.id, self.username
        )
    }
}
