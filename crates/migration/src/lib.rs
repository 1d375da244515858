//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_services;
mod m20251020_000002_create_contacts;
mod m20251020_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_services::Migration),
            Box::new(m20251020_000002_create_contacts::Migration),
            // Indexes should always be applied last
            Box::new(m20251020_000003_add_indexes::Migration),
        ]
    }
}
