//! Lead request repository.

use domain::models::{LeadRequest, LeadRequestStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::LeadRequestEntity;
use crate::store::{Criteria, Document, Store, StoreError};

use super::NEWEST_FIRST;

/// Repository for the lead_requests collection.
#[derive(Clone)]
pub struct LeadRequestRepository {
    store: Store<LeadRequestEntity>,
}

impl LeadRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Store::new(pool),
        }
    }

    /// All requests, newest first.
    pub async fn list(&self) -> Result<Vec<LeadRequest>, StoreError> {
        let rows = self.store.list(Some(NEWEST_FIRST)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Requests submitted by one member, newest first.
    pub async fn for_member(&self, email: &str) -> Result<Vec<LeadRequest>, StoreError> {
        let criteria = Criteria::new().field("requested_by", email);
        let rows = self.store.filter(&criteria, Some(NEWEST_FIRST)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Requests in a given status, for the admin overview.
    pub async fn with_status(
        &self,
        status: LeadRequestStatus,
    ) -> Result<Vec<LeadRequest>, StoreError> {
        let criteria = Criteria::new().field("status", status.to_string());
        let rows = self.store.filter(&criteria, None).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, values: &Document) -> Result<Option<LeadRequest>, StoreError> {
        Ok(self.store.create(values).await?.map(Into::into))
    }

    pub async fn update(
        &self,
        id: Uuid,
        values: &Document,
    ) -> Result<Option<LeadRequest>, StoreError> {
        Ok(self.store.update(id, values).await?.map(Into::into))
    }
}
