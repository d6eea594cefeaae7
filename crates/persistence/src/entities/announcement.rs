//! Announcement entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use crate::store::Row;

/// Database row mapping for the announcements table. The `kind` column is
/// named `type` in the schema to match the exported JSON shape.
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementEntity {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Row for AnnouncementEntity {
    const TABLE: &'static str = "announcements";
}

impl From<AnnouncementEntity> for domain::models::Announcement {
    fn from(entity: AnnouncementEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            message: entity.message,
            kind: domain::models::AnnouncementKind::from_str(&entity.kind).unwrap_or_default(),
            is_active: entity.is_active,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
