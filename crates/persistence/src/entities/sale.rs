//! Sale entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use crate::store::Row;

/// Database row mapping for the sales table.
#[derive(Debug, Clone, FromRow)]
pub struct SaleEntity {
    pub id: Uuid,
    pub client_name: String,
    pub rep_email: String,
    pub sale_amount: f64,
    pub commission_amount: f64,
    pub commission_paid: bool,
    pub payment_status: String,
    pub sale_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Row for SaleEntity {
    const TABLE: &'static str = "sales";
}

impl From<SaleEntity> for domain::models::Sale {
    fn from(entity: SaleEntity) -> Self {
        Self {
            id: entity.id,
            client_name: entity.client_name,
            rep_email: entity.rep_email,
            sale_amount: entity.sale_amount,
            commission_amount: entity.commission_amount,
            commission_paid: entity.commission_paid,
            payment_status: domain::models::PaymentStatus::from_str(&entity.payment_status)
                .unwrap_or_default(),
            sale_date: entity.sale_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
