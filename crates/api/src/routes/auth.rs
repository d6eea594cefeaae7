//! Authentication route handlers.
//!
//! Sessions live in the hosted auth service; these endpoints only resolve
//! the current user, revoke sessions, and hand out the login redirect.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::Deserialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Create authentication routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/logout", post(logout))
        .route("/login", get(login))
}

/// Get the current user with profile data merged in.
///
/// GET /api/v1/auth/me
#[axum::debug_handler(state = AppState)]
async fn me(CurrentUser(user): CurrentUser) -> Json<domain::models::CurrentUser> {
    Json(user)
}

/// Revoke the caller's session.
///
/// POST /api/v1/auth/logout
///
/// Succeeds even when no session exists; there is nothing to revoke.
#[axum::debug_handler(state = AppState)]
async fn logout(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<StatusCode, ApiError> {
    if let Some(TypedHeader(bearer)) = bearer {
        state.sessions.sign_out(bearer.token()).await?;
        info!("Session signed out");
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
struct LoginQuery {
    return_to: Option<String>,
}

/// Redirect to the auth service's login page.
///
/// GET /api/v1/auth/login?return_to=...
#[axum::debug_handler(state = AppState)]
async fn login(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> impl IntoResponse {
    let url = state.sessions.login_url(query.return_to.as_deref());
    Redirect::temporary(&url)
}
