use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Policyvehicle: lookups are always by policy number
        manager
            .create_index(
                Index::create()
                    .name("idx_policyvehicle_policy")
                    .table(Policyvehicle::Table)
                    .col(Policyvehicle::PolicyNumber)
                    .to_owned(),
            )
            .await?;

        // Vehicle: chassis number identifies one vehicle
        manager
            .create_index(
                Index::create()
                    .name("uniq_vehicle_chassis")
                    .table(Vehicle::Table)
                    .col(Vehicle::ChassisNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // UserPolicyList: a policy is attached to a user at most once
        manager
            .create_index(
                Index::create()
                    .name("uniq_user_policy_list_user_policy")
                    .table(UserPolicyList::Table)
                    .col(UserPolicyList::UserId)
                    .col(UserPolicyList::PolicyNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_user_policy_list_policy")
                    .table(UserPolicyList::Table)
                    .col(UserPolicyList::PolicyNumber)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_policyvehicle_policy").table(Policyvehicle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_vehicle_chassis").table(Vehicle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_user_policy_list_user_policy").table(UserPolicyList::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_policy_list_policy").table(UserPolicyList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Policyvehicle { Table, PolicyNumber }

#[derive(DeriveIden)]
enum Vehicle { Table, ChassisNumber }

#[derive(DeriveIden)]
enum UserPolicyList { Table, UserId, PolicyNumber }
