//! Resource repository.

use domain::models::Resource;
use sqlx::PgPool;

use crate::entities::ResourceEntity;
use crate::store::{Criteria, Document, Store, StoreError};

use super::NEWEST_FIRST;

/// Repository for the resources collection.
#[derive(Clone)]
pub struct ResourceRepository {
    store: Store<ResourceEntity>,
}

impl ResourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Store::new(pool),
        }
    }

    /// Active resources, newest first.
    pub async fn active(&self) -> Result<Vec<Resource>, StoreError> {
        let criteria = Criteria::new().field("is_active", true);
        let rows = self.store.filter(&criteria, Some(NEWEST_FIRST)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, values: &Document) -> Result<Option<Resource>, StoreError> {
        Ok(self.store.create(values).await?.map(Into::into))
    }
}
