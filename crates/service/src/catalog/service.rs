use tracing::{info, instrument};

use models::services;

use super::domain::{CreateServiceInput, UpdateServiceInput};
use super::{repository, seed};
use crate::errors::ServiceError;
use crate::store::Store;

/// Application service for the catalog.
/// Reads make sure the defaults exist before answering.
#[derive(Clone)]
pub struct CatalogService {
    store: Store,
}

impl CatalogService {
    pub fn new(store: Store) -> Self { Self { store } }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<services::Model>, ServiceError> {
        let db = self.store.db().await?;
        seed::ensure_defaults(db).await?;
        repository::list_services(db).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<services::Model, ServiceError> {
        let db = self.store.db().await?;
        seed::ensure_defaults(db).await?;
        repository::get_service(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Service"))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateServiceInput) -> Result<services::Model, ServiceError> {
        let db = self.store.db().await?;
        let created = repository::create_service(db, input).await?;
        info!(id = %created.id, title = %created.title, "service created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: UpdateServiceInput) -> Result<services::Model, ServiceError> {
        let db = self.store.db().await?;
        let updated = repository::update_service(db, id, input).await?;
        info!(id = %updated.id, "service updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let db = self.store.db().await?;
        if !repository::delete_service(db, id).await? {
            return Err(ServiceError::not_found("Service"));
        }
        info!(%id, "service deleted");
        Ok(())
    }
}
