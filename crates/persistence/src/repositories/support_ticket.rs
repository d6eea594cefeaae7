//! Support ticket repository.

use domain::models::{SupportTicket, TicketStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::SupportTicketEntity;
use crate::store::{Criteria, Document, Store, StoreError};

use super::NEWEST_FIRST;

/// Repository for the support_tickets collection.
#[derive(Clone)]
pub struct SupportTicketRepository {
    store: Store<SupportTicketEntity>,
}

impl SupportTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Store::new(pool),
        }
    }

    /// All tickets, newest first.
    pub async fn list(&self) -> Result<Vec<SupportTicket>, StoreError> {
        let rows = self.store.list(Some(NEWEST_FIRST)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Tickets submitted by one member, newest first.
    pub async fn for_member(&self, email: &str) -> Result<Vec<SupportTicket>, StoreError> {
        let criteria = Criteria::new().field("submitted_by", email);
        let rows = self.store.filter(&criteria, Some(NEWEST_FIRST)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Tickets in a given status, for the admin overview.
    pub async fn with_status(&self, status: TicketStatus) -> Result<Vec<SupportTicket>, StoreError> {
        let criteria = Criteria::new().field("status", status.to_string());
        let rows = self.store.filter(&criteria, None).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, values: &Document) -> Result<Option<SupportTicket>, StoreError> {
        Ok(self.store.create(values).await?.map(Into::into))
    }

    pub async fn update(
        &self,
        id: Uuid,
        values: &Document,
    ) -> Result<Option<SupportTicket>, StoreError> {
        Ok(self.store.update(id, values).await?.map(Into::into))
    }
}
