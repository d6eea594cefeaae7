//! Lead request entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use crate::store::Row;

/// Database row mapping for the lead_requests table.
#[derive(Debug, Clone, FromRow)]
pub struct LeadRequestEntity {
    pub id: Uuid,
    pub quantity: i32,
    pub industry: String,
    pub region: String,
    pub notes: Option<String>,
    pub status: String,
    pub requested_by: String,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Row for LeadRequestEntity {
    const TABLE: &'static str = "lead_requests";
}

impl From<LeadRequestEntity> for domain::models::LeadRequest {
    fn from(entity: LeadRequestEntity) -> Self {
        Self {
            id: entity.id,
            quantity: entity.quantity,
            industry: entity.industry,
            region: entity.region,
            notes: entity.notes,
            status: domain::models::LeadRequestStatus::from_str(&entity.status)
                .unwrap_or_default(),
            requested_by: entity.requested_by,
            admin_notes: entity.admin_notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
