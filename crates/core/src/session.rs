//! Session records and the token variants attached to requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Prefix the backend reserves for tokens it cannot resolve to a user on
/// its own. Requests carrying one must also carry the serialized user
/// record in an `X-User-Data` header.
pub const FALLBACK_TOKEN_PREFIX: &str = "user_fallback_token_";

/// Profile snapshot persisted alongside the token at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub is_approved: bool,
    pub requires_approval: bool,
    pub is_active: bool,
    /// Last time the forced-logout endpoint confirmed this account intact.
    pub last_auth_check: DateTime<Utc>,
}

/// Token as persisted by the credential store.
///
/// The variant is decided once, when the token enters the store. Request
/// paths read the tag instead of re-inspecting the token text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoredToken {
    Bearer { token: String },
    Fallback { token: String },
}

impl StoredToken {
    /// Classify a raw token string returned by the backend.
    pub fn classify(raw: impl Into<String>) -> Self {
        let token = raw.into();
        if token.starts_with(FALLBACK_TOKEN_PREFIX) {
            Self::Fallback { token }
        } else {
            Self::Bearer { token }
        }
    }

    /// The credential text sent in the `Authorization` header.
    pub fn secret(&self) -> &str {
        match self {
            Self::Bearer { token } | Self::Fallback { token } => token,
        }
    }

    /// Whether requests using this token need the identity side channel.
    pub fn needs_identity(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Credentials resolved for one outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthToken {
    /// Standard bearer token. The backend resolves the user from it.
    Bearer(String),
    /// Fallback token plus the serialized user record the backend needs
    /// to recover the caller's identity.
    FallbackWithIdentity { token: String, identity: String },
}

impl AuthToken {
    /// The credential text, whatever the variant.
    pub fn secret(&self) -> &str {
        match self {
            Self::Bearer(token) | Self::FallbackWithIdentity { token, .. } => token,
        }
    }
}

/// A complete session: token and profile, always stored together.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub token: StoredToken,
    pub user: UserProfile,
}

impl SessionRecord {
    /// Build a record from a raw backend token, classifying it once.
    pub fn new(raw_token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: StoredToken::classify(raw_token),
            user,
        }
    }

    /// Resolve the credentials to attach to an outgoing request.
    pub fn auth_token(&self) -> AuthToken {
        match &self.token {
            StoredToken::Bearer { token } => AuthToken::Bearer(token.clone()),
            StoredToken::Fallback { token } => AuthToken::FallbackWithIdentity {
                token: token.clone(),
                identity: serde_json::to_string(&self.user).unwrap_or_default(),
            },
        }
    }
}
