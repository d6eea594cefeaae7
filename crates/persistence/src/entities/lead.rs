//! Lead entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use crate::store::Row;

/// Database row mapping for the leads table.
#[derive(Debug, Clone, FromRow)]
pub struct LeadEntity {
    pub id: Uuid,
    pub company_name: String,
    pub contact_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
    pub region: Option<String>,
    pub status: String,
    pub assigned_to: Option<String>,
    pub estimated_value: Option<f64>,
    pub notes: Option<String>,
    pub last_contacted: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Row for LeadEntity {
    const TABLE: &'static str = "leads";
}

impl From<LeadEntity> for domain::models::Lead {
    fn from(entity: LeadEntity) -> Self {
        Self {
            id: entity.id,
            company_name: entity.company_name,
            contact_name: entity.contact_name,
            email: entity.email,
            phone: entity.phone,
            industry: entity.industry,
            region: entity.region,
            status: domain::models::LeadStatus::from_str(&entity.status).unwrap_or_default(),
            assigned_to: entity.assigned_to,
            estimated_value: entity.estimated_value,
            notes: entity.notes,
            last_contacted: entity.last_contacted,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
