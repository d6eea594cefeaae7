//! Admin branding and navigation configuration route handlers.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use validator::Validate;

use domain::models::{AppConfiguration, ExternalTool, NavigationItem};
use persistence::repositories::AppConfigurationRepository;
use persistence::store::Document;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminUser;

/// Create admin configuration routes.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/configuration",
        get(get_configuration).put(update_configuration),
    )
}

/// Get the raw configuration row, seeding defaults when none exists.
///
/// GET /api/v1/admin/configuration
#[axum::debug_handler(state = AppState)]
async fn get_configuration(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<AppConfiguration>, ApiError> {
    let repo = AppConfigurationRepository::new(state.pool.clone());
    Ok(Json(repo.resolve().await?))
}

#[derive(Debug, Deserialize, Validate)]
struct UpdateConfigurationRequest {
    #[validate(length(min = 1, max = 100))]
    app_name: Option<String>,
    #[validate(length(max = 200))]
    app_tagline: Option<String>,
    #[validate(url)]
    logo_url: Option<String>,
    #[validate(url)]
    favicon_url: Option<String>,
    #[validate(custom(function = "validate_color"))]
    primary_color: Option<String>,
    #[validate(custom(function = "validate_color"))]
    secondary_color: Option<String>,
    #[validate(length(max = 50))]
    company_phone: Option<String>,
    custom_css: Option<String>,
    navigation_items: Option<Vec<NavigationItem>>,
    external_tools: Option<Vec<ExternalTool>>,
}

fn validate_color(color: &str) -> Result<(), validator::ValidationError> {
    shared::validation::validate_hex_color(color)
}

/// Update branding and navigation.
///
/// PUT /api/v1/admin/configuration
///
/// Applies to the effective (oldest) configuration row; the update is a
/// last-write-wins overwrite at the store.
#[axum::debug_handler(state = AppState)]
async fn update_configuration(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(request): Json<UpdateConfigurationRequest>,
) -> Result<Json<AppConfiguration>, ApiError> {
    request.validate()?;

    let repo = AppConfigurationRepository::new(state.pool.clone());
    let current = repo.resolve().await?;

    let mut values = Document::new();
    if let Some(app_name) = request.app_name {
        values = values.set("app_name", app_name);
    }
    if let Some(app_tagline) = request.app_tagline {
        values = values.set("app_tagline", app_tagline);
    }
    if let Some(logo_url) = request.logo_url {
        values = values.set("logo_url", logo_url);
    }
    if let Some(favicon_url) = request.favicon_url {
        values = values.set("favicon_url", favicon_url);
    }
    if let Some(primary_color) = request.primary_color {
        values = values.set("primary_color", primary_color);
    }
    if let Some(secondary_color) = request.secondary_color {
        values = values.set("secondary_color", secondary_color);
    }
    if let Some(company_phone) = request.company_phone {
        values = values.set("company_phone", company_phone);
    }
    if let Some(custom_css) = request.custom_css {
        values = values.set("custom_css", custom_css);
    }
    if let Some(navigation_items) = request.navigation_items {
        values = values.set("navigation_items", json!(navigation_items));
    }
    if let Some(external_tools) = request.external_tools {
        values = values.set("external_tools", json!(external_tools));
    }

    let updated = repo
        .update(current.id, &values)
        .await?
        .ok_or_else(|| ApiError::NotFound("Configuration not found".to_string()))?;

    info!(admin = %admin.email, "Updated app configuration");

    Ok(Json(updated))
}
