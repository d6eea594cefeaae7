//! Effective configuration for the navigation shell.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use domain::models::{ExternalTool, NavigationItem};
use persistence::repositories::AppConfigurationRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Create navigation configuration routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_config))
}

/// Branding plus the filtered, ordered navigation lists the shell
/// renders. Inactive items never leave the backend.
#[derive(Debug, Serialize)]
pub struct ShellConfigResponse {
    pub app_name: String,
    pub app_tagline: String,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub company_phone: Option<String>,
    pub custom_css: Option<String>,
    pub navigation_items: Vec<NavigationItem>,
    pub external_tools: Vec<ExternalTool>,
}

/// Get the effective app configuration.
///
/// GET /api/v1/config
///
/// Self-healing: resolves to the oldest stored configuration row, seeding
/// the defaults when the collection is empty.
#[axum::debug_handler(state = AppState)]
async fn get_config(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<ShellConfigResponse>, ApiError> {
    let repo = AppConfigurationRepository::new(state.pool.clone());
    let config = repo.resolve().await?;

    let response = ShellConfigResponse {
        navigation_items: config.active_navigation(),
        external_tools: config.active_tools(),
        app_name: config.app_name,
        app_tagline: config.app_tagline,
        logo_url: config.logo_url,
        favicon_url: config.favicon_url,
        primary_color: config.primary_color,
        secondary_color: config.secondary_color,
        company_phone: config.company_phone,
        custom_css: config.custom_css,
    };

    Ok(Json(response))
}
