//! Announcement repository.

use domain::models::Announcement;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::AnnouncementEntity;
use crate::store::{Criteria, Document, Store, StoreError};

use super::NEWEST_FIRST;

/// Repository for the announcements collection.
#[derive(Clone)]
pub struct AnnouncementRepository {
    store: Store<AnnouncementEntity>,
}

impl AnnouncementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Store::new(pool),
        }
    }

    /// All announcements, newest first.
    pub async fn list(&self) -> Result<Vec<Announcement>, StoreError> {
        let rows = self.store.list(Some(NEWEST_FIRST)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Active announcements, newest first, for member dashboards.
    pub async fn active(&self) -> Result<Vec<Announcement>, StoreError> {
        let criteria = Criteria::new().field("is_active", true);
        let rows = self.store.filter(&criteria, Some(NEWEST_FIRST)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, values: &Document) -> Result<Option<Announcement>, StoreError> {
        Ok(self.store.create(values).await?.map(Into::into))
    }

    /// Updates by primary key. Toggling a concurrently deleted
    /// announcement yields `None`, not an error.
    pub async fn update(
        &self,
        id: Uuid,
        values: &Document,
    ) -> Result<Option<Announcement>, StoreError> {
        Ok(self.store.update(id, values).await?.map(Into::into))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.store.delete(id).await
    }
}
