//! Current-user extraction.
//!
//! Resolves the Bearer token through the auth service, then merges the
//! profile row looked up by the session email. Authentication is
//! authoritative; profile data is best-effort, so a store failure during
//! the profile lookup degrades to the auth-only identity instead of
//! failing the request.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracing::warn;

use persistence::repositories::UserRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// The authenticated caller with profile data merged in.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub domain::models::CurrentUser);

impl CurrentUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| state.authentication_required())?;

        // No session is the expected "not signed in" outcome; a failing
        // auth service is an outage and propagates as 500.
        let session = state
            .sessions
            .fetch_session(bearer.token())
            .await?
            .ok_or_else(|| state.authentication_required())?;

        let users = UserRepository::new(state.pool.clone());
        let profile = match users.find_by_email(&session.email).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(email = %session.email, "Profile lookup failed, using auth-only identity: {}", err);
                None
            }
        };

        Ok(CurrentUser(domain::models::CurrentUser::merge(
            &session,
            profile.as_ref(),
        )))
    }
}

/// The authenticated caller, gated to the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub domain::models::CurrentUser);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(ApiError::Forbidden("Admin access required".to_string()));
        }
        Ok(AdminUser(user))
    }
}
