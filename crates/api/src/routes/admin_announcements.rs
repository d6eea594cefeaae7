//! Admin announcement management route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::models::{Announcement, AnnouncementKind};
use persistence::repositories::AnnouncementRepository;
use persistence::store::Document;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminUser;

/// Create admin announcement routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/announcements", get(list_announcements).post(create_announcement))
        .route(
            "/announcements/:announcement_id",
            patch(update_announcement).delete(delete_announcement),
        )
}

#[derive(Debug, Serialize)]
pub struct AnnouncementsResponse {
    pub total: usize,
    pub announcements: Vec<Announcement>,
}

/// List every announcement, newest first.
///
/// GET /api/v1/admin/announcements
#[axum::debug_handler(state = AppState)]
async fn list_announcements(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<AnnouncementsResponse>, ApiError> {
    let repo = AnnouncementRepository::new(state.pool.clone());
    let announcements = repo.list().await?;

    Ok(Json(AnnouncementsResponse {
        total: announcements.len(),
        announcements,
    }))
}

#[derive(Debug, Deserialize, Validate)]
struct CreateAnnouncementRequest {
    #[validate(length(min = 1, max = 200))]
    title: String,
    #[validate(length(min = 1, max = 5000))]
    message: String,
    #[serde(default, rename = "type")]
    kind: AnnouncementKind,
    #[serde(default = "default_true")]
    is_active: bool,
    expires_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Publish an announcement.
///
/// POST /api/v1/admin/announcements
#[axum::debug_handler(state = AppState)]
async fn create_announcement(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(request): Json<CreateAnnouncementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let values = Document::new()
        .set("title", request.title)
        .set("message", request.message)
        .set("type", request.kind.to_string())
        .set("is_active", request.is_active)
        .set("expires_at", request.expires_at);

    let repo = AnnouncementRepository::new(state.pool.clone());
    let created = repo.create(&values).await?;

    info!(admin = %admin.email, "Published announcement");

    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Debug, Deserialize, Validate)]
struct UpdateAnnouncementRequest {
    #[validate(length(min = 1, max = 200))]
    title: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<AnnouncementKind>,
    is_active: Option<bool>,
    expires_at: Option<DateTime<Utc>>,
}

/// Edit or toggle an announcement.
///
/// PATCH /api/v1/admin/announcements/:announcement_id
///
/// Toggling an announcement that was concurrently deleted is a silent
/// no-op, matching the store's idempotent-absent policy.
#[axum::debug_handler(state = AppState)]
async fn update_announcement(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(announcement_id): Path<Uuid>,
    Json(request): Json<UpdateAnnouncementRequest>,
) -> Result<Json<Option<Announcement>>, ApiError> {
    request.validate()?;

    let mut values = Document::new();
    if let Some(title) = request.title {
        values = values.set("title", title);
    }
    if let Some(message) = request.message {
        values = values.set("message", message);
    }
    if let Some(kind) = request.kind {
        values = values.set("type", kind.to_string());
    }
    if let Some(is_active) = request.is_active {
        values = values.set("is_active", is_active);
    }
    if let Some(expires_at) = request.expires_at {
        values = values.set("expires_at", expires_at);
    }

    let repo = AnnouncementRepository::new(state.pool.clone());
    let updated = repo.update(announcement_id, &values).await?;

    info!(
        admin = %admin.email,
        announcement_id = %announcement_id,
        found = updated.is_some(),
        "Updated announcement"
    );

    Ok(Json(updated))
}

/// Remove an announcement. Deleting a missing id succeeds.
///
/// DELETE /api/v1/admin/announcements/:announcement_id
#[axum::debug_handler(state = AppState)]
async fn delete_announcement(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(announcement_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = AnnouncementRepository::new(state.pool.clone());
    let deleted = repo.delete(announcement_id).await?;

    info!(
        admin = %admin.email,
        announcement_id = %announcement_id,
        deleted,
        "Deleted announcement"
    );

    Ok(StatusCode::NO_CONTENT)
}
