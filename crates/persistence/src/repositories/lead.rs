//! Lead repository.

use domain::models::Lead;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::LeadEntity;
use crate::store::{Criteria, Document, Store, StoreError};

use super::NEWEST_FIRST;

/// Repository for the leads collection.
#[derive(Clone)]
pub struct LeadRepository {
    store: Store<LeadEntity>,
}

impl LeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Store::new(pool),
        }
    }

    pub async fn list(&self, order: Option<&str>) -> Result<Vec<Lead>, StoreError> {
        let rows = self.store.list(order).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn filter(
        &self,
        criteria: &Criteria,
        order: Option<&str>,
    ) -> Result<Vec<Lead>, StoreError> {
        let rows = self.store.filter(criteria, order).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Leads assigned to one rep, newest first, with optional extra
    /// equality filters already in `criteria`.
    pub async fn for_rep(&self, email: &str, criteria: Criteria) -> Result<Vec<Lead>, StoreError> {
        let criteria = criteria.field("assigned_to", email);
        self.filter(&criteria, Some(NEWEST_FIRST)).await
    }

    pub async fn create(&self, values: &Document) -> Result<Option<Lead>, StoreError> {
        Ok(self.store.create(values).await?.map(Into::into))
    }

    pub async fn update(&self, id: Uuid, values: &Document) -> Result<Option<Lead>, StoreError> {
        Ok(self.store.update(id, values).await?.map(Into::into))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.store.delete(id).await
    }
}
