//! Authentication: session value, persistence, login/restore/logout.
//!
//! ## Session Model
//!
//! - A [`Session`] exists iff both a parseable user record and a token exist.
//!   Partial or corrupt persisted state is treated as absent and cleared.
//! - The session lives in one [`SessionHandle`] shared by the HTTP layer
//!   (reader: attaches `Authorization: Bearer <token>`) and the auth sub-client
//!   (the only writer).
//! - The token is never exposed through the public API and never logged.
//!
//! ## Persistence
//!
//! Token and user profile are the only durable client state. They are written
//! to a [`SessionStore`] under [`TOKEN_KEY`] and [`USER_KEY`].

#[cfg(feature = "http")]
pub mod client;
pub mod store;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use store::{FileSessionStore, MemorySessionStore, SessionStore, TOKEN_KEY, USER_KEY};

/// Shared, lifecycle-scoped session slot.
#[cfg(feature = "http")]
pub type SessionHandle = std::sync::Arc<async_lock::RwLock<Option<Session>>>;

// ============================================================================
// User profile types
// ============================================================================

/// User profile as issued by the backend at login.
///
/// Serializes to the backend's wire shape so it can be persisted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(
        rename = "idUsuario",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "rol", alias = "role")]
    pub role: Role,
    #[serde(rename = "perfilBolsa", alias = "exchangeProfile")]
    pub exchange_profile: String,
}

/// Role of an authenticated user.
///
/// Any value outside the two known roles is valid data and is preserved in
/// [`Role::Unknown`]; it routes to a terminal screen instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Operator,
    Admin,
    Unknown(String),
}

impl Role {
    /// Exact match against the known role names; no case folding.
    pub fn parse(s: &str) -> Self {
        match s {
            "Operador" | "Operator" => Role::Operator,
            "Admin" => Role::Admin,
            other => Role::Unknown(other.to_string()),
        }
    }

    /// Backend spelling.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Operator => "Operador",
            Role::Admin => "Admin",
            Role::Unknown(s) => s,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Role::parse(&s))
    }
}

// ============================================================================
// Session
// ============================================================================

/// An authenticated session: the user plus the opaque bearer token.
#[derive(Clone)]
pub struct Session {
    user: UserProfile,
    token: String,
}

impl Session {
    pub(crate) fn new(user: UserProfile, token: String) -> Self {
        Self { user, token }
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Login request body sent to the backend.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response from the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: Option<UserProfile>,
    pub session_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_exact_match() {
        assert_eq!(Role::parse("Operador"), Role::Operator);
        assert_eq!(Role::parse("Operator"), Role::Operator);
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("admin"), Role::Unknown("admin".into()));
        assert_eq!(Role::parse("Guest"), Role::Unknown("Guest".into()));
    }

    #[test]
    fn test_user_profile_wire_roundtrip() {
        let json = r#"{
            "idUsuario": "65f1c0ffee",
            "nombre": "MirtaAguilar",
            "rol": "Operador",
            "perfilBolsa": "CL"
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "MirtaAguilar");
        assert_eq!(user.role, Role::Operator);
        assert_eq!(user.exchange_profile, "CL");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["rol"], "Operador");
        assert_eq!(back["perfilBolsa"], "CL");
    }

    #[test]
    fn test_unknown_role_is_preserved() {
        let json = r#"{"nombre": "x", "rol": "Guest", "perfilBolsa": "Regional"}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Unknown("Guest".into()));
        assert!(user.id.is_none());
        assert_eq!(serde_json::to_value(&user).unwrap()["rol"], "Guest");
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let user = UserProfile {
            id: None,
            name: "GabrielFuentes".into(),
            role: Role::Admin,
            exchange_profile: "Regional".into(),
        };
        let session = Session::new(user, "session_secret".into());
        let dbg = format!("{:?}", session);
        assert!(!dbg.contains("session_secret"));
        assert!(dbg.contains("GabrielFuentes"));
    }
}
