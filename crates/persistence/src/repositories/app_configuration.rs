//! Application configuration repository and resolver.

use domain::models::app_configuration::{
    default_external_tools, default_navigation, defaults,
};
use domain::models::AppConfiguration;
use serde_json::json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::entities::AppConfigurationEntity;
use crate::store::{Document, Store, StoreError};

/// Repository for the app_configurations collection.
///
/// The collection is a logical singleton with no uniqueness constraint.
/// [`AppConfigurationRepository::resolve`] applies a deterministic
/// tiebreak (oldest row wins) and seeds the defaults when the collection
/// is empty.
#[derive(Clone)]
pub struct AppConfigurationRepository {
    store: Store<AppConfigurationEntity>,
}

impl AppConfigurationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Store::new(pool),
        }
    }

    /// Returns the effective configuration row, creating the default one
    /// when none exists yet. Resolving twice against an initially empty
    /// collection stores exactly one row.
    pub async fn resolve(&self) -> Result<AppConfiguration, StoreError> {
        let mut rows = self.store.list(Some("created_at")).await?;
        if !rows.is_empty() {
            return Ok(rows.remove(0).into());
        }

        info!("No app configuration found, seeding defaults");
        let seeded = self.store.create(&default_document()).await?;
        match seeded {
            Some(row) => Ok(row.into()),
            // The insert reported success without returning a row; fall
            // back to a fresh read so a concurrent seeder's row wins.
            None => {
                let mut rows = self.store.list(Some("created_at")).await?;
                if rows.is_empty() {
                    Err(StoreError::Database(sqlx::Error::RowNotFound))
                } else {
                    Ok(rows.remove(0).into())
                }
            }
        }
    }

    /// Updates the configuration row by primary key.
    pub async fn update(
        &self,
        id: Uuid,
        values: &Document,
    ) -> Result<Option<AppConfiguration>, StoreError> {
        Ok(self.store.update(id, values).await?.map(Into::into))
    }
}

/// The seed document inserted when the collection is empty: fixed
/// branding plus the five-item navigation and external tool lists.
fn default_document() -> Document {
    Document::new()
        .set("app_name", defaults::APP_NAME)
        .set("app_tagline", defaults::APP_TAGLINE)
        .set("primary_color", defaults::PRIMARY_COLOR)
        .set("secondary_color", defaults::SECONDARY_COLOR)
        .set("company_phone", defaults::COMPANY_PHONE)
        .set("navigation_items", json!(default_navigation()))
        .set("external_tools", json!(default_external_tools()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BindValue;

    #[test]
    fn test_default_document_carries_branding_and_lists() {
        let doc = default_document();
        assert!(!doc.is_empty());
        let fields: Vec<&str> = doc.iter().map(|(c, _)| c).collect();
        assert!(fields.contains(&"app_name"));
        assert!(fields.contains(&"navigation_items"));
        assert!(fields.contains(&"external_tools"));
        let nav = doc
            .iter()
            .find(|(c, _)| *c == "navigation_items")
            .map(|(_, v)| v)
            .unwrap();
        match nav {
            BindValue::Json(value) => assert_eq!(value.as_array().unwrap().len(), 5),
            other => panic!("navigation_items bound as {:?}", other),
        }
    }
}
