//! Admin user management route handlers.

use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::models::{User, UserRole};
use persistence::repositories::UserRepository;
use persistence::store::Document;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminUser;

/// Create admin user routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:user_id", patch(update_user))
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub total: usize,
    pub users: Vec<User>,
}

/// List every team member profile.
///
/// GET /api/v1/admin/users
#[axum::debug_handler(state = AppState)]
async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<UsersResponse>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.list().await?;

    Ok(Json(UsersResponse {
        total: users.len(),
        users,
    }))
}

#[derive(Debug, Deserialize, Validate)]
struct UpdateUserRequest {
    #[validate(length(min = 1, max = 200))]
    full_name: Option<String>,
    role: Option<UserRole>,
    #[validate(length(max = 50))]
    phone: Option<String>,
    is_active: Option<bool>,
}

/// Update a member's profile (name, role, activation).
///
/// PATCH /api/v1/admin/users/:user_id
#[axum::debug_handler(state = AppState)]
async fn update_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    request.validate()?;

    let mut values = Document::new();
    if let Some(full_name) = request.full_name {
        values = values.set("full_name", full_name);
    }
    if let Some(role) = request.role {
        values = values.set("role", role.to_string());
    }
    if let Some(phone) = request.phone {
        values = values.set("phone", phone);
    }
    if let Some(is_active) = request.is_active {
        values = values.set("is_active", is_active);
    }

    let repo = UserRepository::new(state.pool.clone());
    let updated = repo
        .update(user_id, &values)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    info!(admin = %admin.email, user_id = %user_id, "Updated user profile");

    Ok(Json(updated))
}
