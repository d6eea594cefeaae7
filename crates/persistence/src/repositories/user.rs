//! User profile repository.

use domain::models::User;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::UserEntity;
use crate::store::{Criteria, Document, Store, StoreError};

/// Repository for the users collection.
#[derive(Clone)]
pub struct UserRepository {
    store: Store<UserEntity>,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Store::new(pool),
        }
    }

    /// All profile rows, for administrative listing.
    pub async fn list(&self) -> Result<Vec<User>, StoreError> {
        let rows = self.store.list(None).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Looks up a profile by exact email match.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let mut rows = self
            .store
            .filter(&Criteria::new().field("email", email), None)
            .await?;
        Ok(rows.pop().map(Into::into))
    }

    /// Updates a profile row by primary key; a missing id is a no-op.
    pub async fn update(&self, id: Uuid, values: &Document) -> Result<Option<User>, StoreError> {
        Ok(self.store.update(id, values).await?.map(Into::into))
    }
}
