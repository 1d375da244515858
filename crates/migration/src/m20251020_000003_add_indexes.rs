use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Services: at most one row per default slug; NULLs never collide
        manager
            .create_index(
                Index::create()
                    .name("uniq_services_seed_key")
                    .table(Services::Table)
                    .col(Services::SeedKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Contacts: listed newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_created_at")
                    .table(Contacts::Table)
                    .col(Contacts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_services_seed_key").table(Services::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contacts_created_at").table(Contacts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services { Table, SeedKey }

#[derive(DeriveIden)]
enum Contacts { Table, CreatedAt }
