//! Application configuration entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{ExternalTool, NavigationItem};

use crate::store::Row;

/// Database row mapping for the app_configurations table. Navigation
/// items and external tools are JSONB arrays of structured sub-records.
#[derive(Debug, Clone, FromRow)]
pub struct AppConfigurationEntity {
    pub id: Uuid,
    pub app_name: String,
    pub app_tagline: String,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub company_phone: Option<String>,
    pub custom_css: Option<String>,
    pub navigation_items: Json<Vec<NavigationItem>>,
    pub external_tools: Json<Vec<ExternalTool>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Row for AppConfigurationEntity {
    const TABLE: &'static str = "app_configurations";
}

impl From<AppConfigurationEntity> for domain::models::AppConfiguration {
    fn from(entity: AppConfigurationEntity) -> Self {
        Self {
            id: entity.id,
            app_name: entity.app_name,
            app_tagline: entity.app_tagline,
            logo_url: entity.logo_url,
            favicon_url: entity.favicon_url,
            primary_color: entity.primary_color,
            secondary_color: entity.secondary_color,
            company_phone: entity.company_phone,
            custom_css: entity.custom_css,
            navigation_items: entity.navigation_items.0,
            external_tools: entity.external_tools.0,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
