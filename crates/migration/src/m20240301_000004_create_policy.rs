//! Create `policy` table keyed by the externally issued policy number.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Policy::Table)
                    .if_not_exists()
                    .col(integer(Policy::PolicyNumber).primary_key())
                    .col(date(Policy::StartDate).not_null())
                    .col(date(Policy::EndDate).not_null())
                    .col(double(Policy::Premium).not_null())
                    .col(string_len(Policy::Status, 32).not_null())
                    .col(timestamp_with_time_zone(Policy::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Policy::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Policy { Table, PolicyNumber, StartDate, EndDate, Premium, Status, CreatedAt }
