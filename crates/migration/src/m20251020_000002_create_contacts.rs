//! Create `contacts` table.
//! Contact form submissions; rows are only ever inserted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(string_len(Contacts::Id, 64).primary_key())
                    .col(string_len(Contacts::Name, 256))
                    .col(string_len(Contacts::Email, 320))
                    .col(string_len_null(Contacts::Phone, 64))
                    .col(string_len_null(Contacts::Company, 256))
                    .col(text(Contacts::Message))
                    .col(string_len(Contacts::Status, 16))
                    .col(timestamp_with_time_zone(Contacts::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contacts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Company,
    Message,
    Status,
    CreatedAt,
}
