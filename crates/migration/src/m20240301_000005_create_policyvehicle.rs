//! Create `policyvehicle` linking a policy number to the vehicle it covers.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Policyvehicle::Table)
                    .if_not_exists()
                    .col(uuid(Policyvehicle::Id).primary_key())
                    .col(integer(Policyvehicle::PolicyNumber).not_null())
                    .col(uuid(Policyvehicle::VehicleId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_policyvehicle_policy")
                            .from(Policyvehicle::Table, Policyvehicle::PolicyNumber)
                            .to(Policy::Table, Policy::PolicyNumber)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_policyvehicle_vehicle")
                            .from(Policyvehicle::Table, Policyvehicle::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Policyvehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Policyvehicle { Table, Id, PolicyNumber, VehicleId }

#[derive(DeriveIden)]
enum Policy { Table, PolicyNumber }

#[derive(DeriveIden)]
enum Vehicle { Table, Id }
