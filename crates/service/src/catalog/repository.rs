use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, Set};
use chrono::Utc;
use models::services::{self, Entity as ServiceEntity, Features};

use super::domain::{CreateServiceInput, UpdateServiceInput};
use crate::errors::{db_err, ServiceError};

/// List every service, storage order.
pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<services::Model>, ServiceError> {
    let rows = ServiceEntity::find().all(db).await.map_err(db_err)?;
    Ok(rows)
}

/// Get a service by id.
pub async fn get_service(db: &DatabaseConnection, id: &str) -> Result<Option<services::Model>, ServiceError> {
    let found = ServiceEntity::find_by_id(id.to_string()).one(db).await.map_err(db_err)?;
    Ok(found)
}

/// Create a service with a generated id and creation timestamp.
pub async fn create_service(db: &DatabaseConnection, input: CreateServiceInput) -> Result<services::Model, ServiceError> {
    let created = services::create(db, input.into()).await?;
    Ok(created)
}

/// Replace the supplied fields and stamp `updated_at`; never inserts.
pub async fn update_service(
    db: &DatabaseConnection,
    id: &str,
    input: UpdateServiceInput,
) -> Result<services::Model, ServiceError> {
    let current = ServiceEntity::find_by_id(id.to_string()).one(db).await.map_err(db_err)?;
    let Some(existing) = current else { return Err(ServiceError::not_found("Service")); };
    let mut am: services::ActiveModel = existing.into();
    if let Some(v) = input.title { am.title = Set(v); }
    if let Some(v) = input.description { am.description = Set(v); }
    if let Some(v) = input.icon { am.icon = Set(v); }
    if let Some(v) = input.features { am.features = Set(Features(v)); }
    if let Some(v) = input.category { am.category = Set(v); }
    if let Some(v) = input.image { am.image = Set(v); }
    am.updated_at = Set(Some(Utc::now().into()));
    let updated = am.update(db).await.map_err(db_err)?;
    Ok(updated)
}

/// Delete a service; returns true if a row was removed.
pub async fn delete_service(db: &DatabaseConnection, id: &str) -> Result<bool, ServiceError> {
    let res = ServiceEntity::delete_by_id(id.to_string()).exec(db).await.map_err(db_err)?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_store;

    #[tokio::test]
    async fn service_crud_repository() -> Result<(), anyhow::Error> {
        let store = memory_store();
        let db = store.db().await?;

        let a = create_service(db, CreateServiceInput {
            title: Some("X".into()),
            description: Some("Y".into()),
            ..Default::default()
        }).await?;
        let found = get_service(db, &a.id).await?.unwrap();
        assert_eq!(found.title, "X");
        assert_eq!(found.description, "Y");
        assert_eq!(found.icon, "");
        assert!(found.features.0.is_empty());

        let updated = update_service(db, &a.id, UpdateServiceInput {
            category: Some("data".into()),
            features: Some(vec!["One".into()]),
            ..Default::default()
        }).await?;
        assert_eq!(updated.title, "X");
        assert_eq!(updated.category, "data");
        assert_eq!(updated.features.0, vec!["One".to_string()]);
        assert!(updated.updated_at.is_some());
        assert_eq!(updated.created_at, a.created_at);

        assert!(delete_service(db, &a.id).await?);
        assert!(get_service(db, &a.id).await?.is_none());
        assert!(!delete_service(db, &a.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_does_not_insert() -> Result<(), anyhow::Error> {
        let store = memory_store();
        let db = store.db().await?;

        let err = update_service(db, "nope", UpdateServiceInput { title: Some("T".into()), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Service not found"));
        assert!(list_services(db).await?.is_empty());
        Ok(())
    }
}
