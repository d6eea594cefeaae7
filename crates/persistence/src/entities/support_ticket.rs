//! Support ticket entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use crate::store::Row;

/// Database row mapping for the support_tickets table.
#[derive(Debug, Clone, FromRow)]
pub struct SupportTicketEntity {
    pub id: Uuid,
    pub subject: String,
    pub message: String,
    pub priority: String,
    pub status: String,
    pub submitted_by: String,
    pub admin_response: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Row for SupportTicketEntity {
    const TABLE: &'static str = "support_tickets";
}

impl From<SupportTicketEntity> for domain::models::SupportTicket {
    fn from(entity: SupportTicketEntity) -> Self {
        Self {
            id: entity.id,
            subject: entity.subject,
            message: entity.message,
            priority: domain::models::TicketPriority::from_str(&entity.priority)
                .unwrap_or_default(),
            status: domain::models::TicketStatus::from_str(&entity.status).unwrap_or_default(),
            submitted_by: entity.submitted_by,
            admin_response: entity.admin_response,
            resolved_at: entity.resolved_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
