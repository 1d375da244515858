use sea_orm::{sea_query::OnConflict, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use tracing::{debug, info};

use common::metrics::SERVICES_SEEDED_TOTAL;
use models::services;

use super::defaults::DEFAULT_SERVICES;
use crate::errors::{db_err, ServiceError};

/// Insert the default services when the catalog is empty.
///
/// Runs on every read. Rows carry their slug in `seed_key`, which has a
/// unique index; the insert skips conflicting slugs, so two readers that
/// both observed an empty table cannot produce duplicates. Returns the number
/// of rows actually inserted.
pub async fn ensure_defaults(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let count = services::Entity::find().count(db).await.map_err(db_err)?;
    if count > 0 {
        debug!(count, "catalog not empty; seeding skipped");
        return Ok(0);
    }

    let rows = DEFAULT_SERVICES
        .iter()
        .map(|d| d.to_new_service().into_active_model(Some(d.key.to_string())));

    let inserted = match services::Entity::insert_many(rows)
        .on_conflict(
            OnConflict::column(services::Column::SeedKey)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
    {
        Ok(n) => n,
        // every slug already present
        Err(DbErr::RecordNotInserted) => 0,
        Err(e) => return Err(db_err(e)),
    };

    if inserted > 0 {
        SERVICES_SEEDED_TOTAL.inc_by(inserted);
        info!(inserted, "seeded default services");
    }
    Ok(inserted)
}
