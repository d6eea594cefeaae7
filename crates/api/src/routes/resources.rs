//! Resource library route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use validator::Validate;

use domain::models::{Resource, ResourceCategory};
use persistence::repositories::ResourceRepository;
use persistence::store::Document;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AdminUser, CurrentUser};

/// Create resource routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_resources).post(create_resource))
}

#[derive(Debug, Deserialize, Default)]
struct ResourceQuery {
    category: Option<String>,
    /// Free-text search over title, description and tags.
    q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub total: usize,
    pub resources: Vec<Resource>,
    /// Categories present in the active set, for the filter bar.
    pub categories: Vec<ResourceCategory>,
}

/// List active resources, newest first, with optional category and
/// search filters applied over the fetched set.
///
/// GET /api/v1/resources?category=&q=
#[axum::debug_handler(state = AppState)]
async fn list_resources(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ResourceQuery>,
) -> Result<Json<ResourcesResponse>, ApiError> {
    let repo = ResourceRepository::new(state.pool.clone());
    let all = repo.active().await?;

    let mut categories: Vec<ResourceCategory> = Vec::new();
    for resource in &all {
        if !categories.contains(&resource.category) {
            categories.push(resource.category);
        }
    }

    let category = match query.category.as_deref() {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(
            raw.parse::<ResourceCategory>()
                .map_err(ApiError::Validation)?,
        ),
    };
    let term = query.q.unwrap_or_default();

    let resources: Vec<Resource> = all
        .into_iter()
        .filter(|r| category.map(|c| r.category == c).unwrap_or(true))
        .filter(|r| r.matches(&term))
        .collect();

    Ok(Json(ResourcesResponse {
        total: resources.len(),
        resources,
        categories,
    }))
}

#[derive(Debug, Deserialize, Validate)]
struct CreateResourceRequest {
    #[validate(length(min = 1, max = 200))]
    title: String,
    #[validate(length(max = 2000))]
    description: Option<String>,
    category: ResourceCategory,
    content: Option<String>,
    #[validate(url)]
    file_url: Option<String>,
    #[validate(url)]
    video_url: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Add a resource to the library. New resources are active immediately.
///
/// POST /api/v1/resources
///
/// Admin only.
#[axum::debug_handler(state = AppState)]
async fn create_resource(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(request): Json<CreateResourceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let values = Document::new()
        .set("title", request.title)
        .set("description", request.description)
        .set("category", request.category.to_string())
        .set("content", request.content)
        .set("file_url", request.file_url)
        .set("video_url", request.video_url)
        .set("tags", json!(request.tags))
        .set("is_active", true);

    let repo = ResourceRepository::new(state.pool.clone());
    let created = repo.create(&values).await?;

    info!(admin = %admin.email, "Added resource");

    Ok((StatusCode::CREATED, Json(created)))
}
