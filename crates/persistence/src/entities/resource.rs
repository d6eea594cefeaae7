//! Resource entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use crate::store::Row;

/// Database row mapping for the resources table. Tags are a JSONB string
/// array.
#[derive(Debug, Clone, FromRow)]
pub struct ResourceEntity {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub video_url: Option<String>,
    pub tags: Json<Vec<String>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Row for ResourceEntity {
    const TABLE: &'static str = "resources";
}

impl From<ResourceEntity> for domain::models::Resource {
    fn from(entity: ResourceEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            category: domain::models::ResourceCategory::from_str(&entity.category)
                .unwrap_or_default(),
            content: entity.content,
            file_url: entity.file_url,
            video_url: entity.video_url,
            tags: entity.tags.0,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
