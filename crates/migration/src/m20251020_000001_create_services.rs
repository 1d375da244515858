//! Create `services` table.
//! Marketing catalog entries rendered by the Services section of the site.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(string_len(Services::Id, 64).primary_key())
                    .col(text(Services::Title))
                    .col(text(Services::Description))
                    .col(string_len(Services::Icon, 64))
                    .col(json(Services::Features))
                    .col(string_len(Services::Category, 128))
                    .col(text(Services::Image))
                    // slug of a default record; NULL for records created through the API
                    .col(string_len_null(Services::SeedKey, 64))
                    .col(timestamp_with_time_zone(Services::CreatedAt))
                    .col(timestamp_with_time_zone_null(Services::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Description,
    Icon,
    Features,
    Category,
    Image,
    SeedKey,
    CreatedAt,
    UpdatedAt,
}
