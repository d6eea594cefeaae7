//! Authenticated identity and profile merging.
//!
//! Authentication lives in the hosted auth service; profile data lives in
//! the `users` collection. The merged view favours profile fields over
//! auth-provider metadata, and metadata over the bare session identity.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::user::{User, UserRole};

/// The active session as reported by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub id: Uuid,
    pub email: String,
    /// Provider metadata (display name, avatar, ...); shape is
    /// provider-defined.
    #[serde(default)]
    pub user_metadata: Value,
}

impl AuthSession {
    fn metadata_str(&self, key: &str) -> Option<String> {
        self.user_metadata
            .get(key)
            .and_then(Value::as_str)
            .map(String::from)
    }
}

/// The current user as seen by every view: session identity plus
/// best-effort profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The profile row id when a profile exists, the auth id otherwise.
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    /// Whether a profile row was found for this session's email.
    pub has_profile: bool,
}

impl CurrentUser {
    /// Merges a session with an optional profile row.
    ///
    /// Precedence, lowest to highest: session identity, provider
    /// metadata, profile fields. The result is always fully populated;
    /// callers never see a partial record.
    pub fn merge(session: &AuthSession, profile: Option<&User>) -> Self {
        let meta_full_name = session
            .metadata_str("full_name")
            .or_else(|| session.metadata_str("name"));
        let meta_avatar = session.metadata_str("avatar_url");
        let meta_phone = session.metadata_str("phone");

        match profile {
            Some(profile) => Self {
                id: profile.id,
                email: profile.email.clone(),
                full_name: profile.full_name.clone().or(meta_full_name),
                role: profile.role,
                phone: profile.phone.clone().or(meta_phone),
                avatar_url: profile.avatar_url.clone().or(meta_avatar),
                is_active: profile.is_active,
                has_profile: true,
            },
            None => Self {
                id: session.id,
                email: session.email.clone(),
                full_name: meta_full_name,
                role: UserRole::default(),
                phone: meta_phone,
                avatar_url: meta_avatar,
                is_active: true,
                has_profile: false,
            },
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
