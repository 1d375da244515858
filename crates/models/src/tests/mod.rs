/// Entity round-trips against an in-memory SQLite database
pub mod entity_tests {
    use crate::db::connect_and_migrate;
    use crate::{contacts, errors::ModelError, services};
    use anyhow::Result;
    use configs::DatabaseConfig;
    use sea_orm::{DatabaseConnection, EntityTrait};

    async fn memory_db() -> Result<DatabaseConnection> {
        let cfg = DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..DatabaseConfig::default()
        };
        connect_and_migrate(&cfg).await
    }

    #[tokio::test]
    async fn service_create_and_read_back() -> Result<()> {
        let db = memory_db().await?;

        let created = services::create(
            &db,
            services::NewService {
                title: "Edge Computing".into(),
                features: vec!["CDN".into(), "Workers".into()],
                ..Default::default()
            },
        )
        .await?;
        assert!(!created.id.is_empty());
        assert!(created.updated_at.is_none());
        assert!(created.seed_key.is_none());

        let found = services::Entity::find_by_id(created.id.clone()).one(&db).await?;
        let found = found.expect("row exists");
        assert_eq!(found.title, "Edge Computing");
        assert_eq!(found.description, "");
        assert_eq!(found.features.0, vec!["CDN".to_string(), "Workers".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn service_json_uses_camel_case_and_hides_seed_key() -> Result<()> {
        let db = memory_db().await?;
        let created = services::create(&db, services::NewService { title: "X".into(), ..Default::default() }).await?;

        let v = serde_json::to_value(&created)?;
        assert!(v.get("createdAt").is_some());
        assert!(v.get("updatedAt").is_none());
        assert!(v.get("seedKey").is_none());
        assert!(v.get("seed_key").is_none());
        assert_eq!(v["features"], serde_json::json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn contact_create_sets_status_and_normalizes_optionals() -> Result<()> {
        let db = memory_db().await?;
        let c = contacts::create(&db, "Ada", "ada@example.com", Some("  "), Some("Analytical"), "Hello").await?;
        assert_eq!(c.status, contacts::STATUS_NEW);
        assert_eq!(c.phone, None);
        assert_eq!(c.company.as_deref(), Some("Analytical"));

        let all = contacts::Entity::find().all(&db).await?;
        assert_eq!(all.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn contact_missing_fields_is_validation_error() -> Result<()> {
        let db = memory_db().await?;
        let err = contacts::create(&db, "", "a@b.com", None, None, "hi").await.unwrap_err();
        assert!(matches!(err, ModelError::Validation(ref m) if m == contacts::REQUIRED_FIELDS_MESSAGE));

        let all = contacts::Entity::find().all(&db).await?;
        assert!(all.is_empty());
        Ok(())
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert!(contacts::validate_required("Ada", "a@b.com", "   ").is_err());
        assert!(contacts::validate_required("Ada", "a@b.com", "hi").is_ok());
    }
}
