//! Create `portal_user` table.
//!
//! Holds customer logins; `password_hash` is an Argon2 PHC string.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortalUser::Table)
                    .if_not_exists()
                    .col(uuid(PortalUser::Id).primary_key())
                    .col(string_len(PortalUser::Username, 64).unique_key().not_null())
                    .col(string_len(PortalUser::Email, 255).not_null())
                    .col(string_len(PortalUser::FullName, 128).not_null())
                    .col(string_len(PortalUser::PasswordHash, 255).not_null())
                    .col(timestamp_with_time_zone(PortalUser::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PortalUser::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PortalUser { Table, Id, Username, Email, FullName, PasswordHash, CreatedAt }
