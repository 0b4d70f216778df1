use serde::{Deserialize, Serialize};

use crate::config::ADMIN_ROLE;
use crate::session::errors::SessionError;

/// The user record half of a session, as persisted under the user key.
///
/// `id` is the only required field; a record with a blank `id`
/// deserializes but never validates, so it can be purged rather than
/// rejected with a crash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthUser {
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            name: None,
            email: None,
        }
    }

    /// A user record is usable only with a non-blank `id`.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// Parse a raw persisted value into a user record.
///
/// Non-object JSON (`"str"`, `42`, `[..]`, `null`) and malformed
/// payloads are both parse errors; the caller decides whether that
/// means "no user" or a rejected operation.
pub fn parse_user(raw: &str) -> Result<AuthUser, SessionError> {
    serde_json::from_str::<AuthUser>(raw).map_err(|e| SessionError::Parse(e.to_string()))
}

/// A point-in-time copy of the session manager's state.
///
/// The authorization flags are derived on every call from the
/// token/user pair, never stored, so they cannot drift.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub loading: bool,
    pub token: Option<String>,
    pub user: Option<AuthUser>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        let token_present = self
            .token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        let user_present = self.user.as_ref().is_some_and(|u| u.is_valid());
        token_present && user_present
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated()
            && self
                .user
                .as_ref()
                .is_some_and(|u| u.role == ADMIN_ROLE)
    }

    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.role.as_str())
    }
}
