//! Sale repository.

use domain::models::{PaymentStatus, Sale};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::SaleEntity;
use crate::store::{Criteria, Document, Store, StoreError};

use super::NEWEST_FIRST;

/// Repository for the sales collection.
#[derive(Clone)]
pub struct SaleRepository {
    store: Store<SaleEntity>,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Store::new(pool),
        }
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<Sale>, StoreError> {
        let rows = self.store.list(order).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Sales made by one rep, newest first.
    pub async fn for_rep(&self, email: &str) -> Result<Vec<Sale>, StoreError> {
        let criteria = Criteria::new().field("rep_email", email);
        let rows = self.store.filter(&criteria, Some(NEWEST_FIRST)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, values: &Document) -> Result<Option<Sale>, StoreError> {
        Ok(self.store.create(values).await?.map(Into::into))
    }

    pub async fn update(&self, id: Uuid, values: &Document) -> Result<Option<Sale>, StoreError> {
        Ok(self.store.update(id, values).await?.map(Into::into))
    }

    /// Marks the commission for a sale as paid out. A concurrently
    /// deleted sale is a no-op.
    pub async fn mark_paid(&self, id: Uuid) -> Result<Option<Sale>, StoreError> {
        let values = Document::new()
            .set("commission_paid", true)
            .set("payment_status", PaymentStatus::Paid.to_string());
        self.update(id, &values).await
    }
}
