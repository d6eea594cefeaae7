//! Session resolution against the hosted auth service.
//!
//! The backend holds no credentials and mints no tokens: it forwards the
//! caller's bearer token to the auth service and trusts the answer. Token
//! refresh is the auth service's problem, not ours.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use domain::models::AuthSession;

use crate::config::AuthConfig;

/// Error type for auth service calls.
///
/// An expired or missing session is *not* an error; it surfaces as
/// `Ok(None)` from [`SessionProvider::fetch_session`]. These variants are
/// genuine outages and must not be mistaken for "logged out".
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Auth service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Auth service returned status {0}")]
    Upstream(u16),

    #[error("Malformed session payload: {0}")]
    Malformed(String),
}

/// Session operations the rest of the app depends on. A trait so tests
/// can substitute a scripted provider.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolves a bearer token to the active session, or `None` when the
    /// token carries no session (not authenticated).
    async fn fetch_session(&self, bearer: &str) -> Result<Option<AuthSession>, SessionError>;

    /// Revokes the session behind the bearer token.
    async fn sign_out(&self, bearer: &str) -> Result<(), SessionError>;

    /// The login page to redirect unauthenticated users to.
    fn login_url(&self, return_to: Option<&str>) -> String;
}

#[derive(Debug, Deserialize)]
struct SessionPayload {
    id: Uuid,
    email: String,
    #[serde(default)]
    user_metadata: Value,
}

/// Production [`SessionProvider`] talking to the hosted auth service.
pub struct AuthGateway {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    login_page: String,
}

impl AuthGateway {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            login_page: config.login_url.clone(),
        }
    }
}

#[async_trait]
impl SessionProvider for AuthGateway {
    async fn fetch_session(&self, bearer: &str) -> Result<Option<AuthSession>, SessionError> {
        let response = self
            .http
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let payload: SessionPayload = response
                    .json()
                    .await
                    .map_err(|e| SessionError::Malformed(e.to_string()))?;
                Ok(Some(AuthSession {
                    id: payload.id,
                    email: payload.email,
                    user_metadata: payload.user_metadata,
                }))
            }
            // No session behind this token: an expected outcome, not an
            // outage.
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status => Err(SessionError::Upstream(status.as_u16())),
        }
    }

    async fn sign_out(&self, bearer: &str) -> Result<(), SessionError> {
        let response = self
            .http
            .post(format!("{}/auth/v1/logout", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            // Signing out an already-dead session is a success.
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(()),
            status => Err(SessionError::Upstream(status.as_u16())),
        }
    }

    fn login_url(&self, return_to: Option<&str>) -> String {
        match return_to {
            Some(target) => {
                match reqwest::Url::parse_with_params(&self.login_page, [("return_to", target)]) {
                    Ok(url) => url.to_string(),
                    Err(_) => self.login_page.clone(),
                }
            }
            None => self.login_page.clone(),
        }
    }
}
