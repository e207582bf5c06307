//! Create `rto` table (regional transport offices a vehicle is registered with).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rto::Table)
                    .if_not_exists()
                    .col(pk_auto(Rto::Id))
                    .col(string_len(Rto::Code, 16).unique_key().not_null())
                    .col(string_len(Rto::City, 64).not_null())
                    .col(string_len(Rto::State, 64).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Rto::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Rto { Table, Id, Code, City, State }
