//! Create `user_policy_list` associating portal users with policy numbers.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPolicyList::Table)
                    .if_not_exists()
                    .col(uuid(UserPolicyList::Id).primary_key())
                    .col(uuid(UserPolicyList::UserId).not_null())
                    .col(integer(UserPolicyList::PolicyNumber).not_null())
                    .col(timestamp_with_time_zone(UserPolicyList::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_policy_list_user")
                            .from(UserPolicyList::Table, UserPolicyList::UserId)
                            .to(PortalUser::Table, PortalUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_policy_list_policy")
                            .from(UserPolicyList::Table, UserPolicyList::PolicyNumber)
                            .to(Policy::Table, Policy::PolicyNumber)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserPolicyList::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserPolicyList { Table, Id, UserId, PolicyNumber, CreatedAt }

#[derive(DeriveIden)]
enum PortalUser { Table, Id }

#[derive(DeriveIden)]
enum Policy { Table, PolicyNumber }
