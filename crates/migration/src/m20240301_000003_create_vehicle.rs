//! Create `vehicle` table with FKs into the catalog and `rto`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(uuid(Vehicle::Id).primary_key())
                    .col(string_len(Vehicle::RegistrationNumber, 16).not_null())
                    .col(string_len(Vehicle::ChassisNumber, 32).not_null())
                    .col(string_len(Vehicle::EngineNumber, 32).not_null())
                    .col(integer(Vehicle::BrandId).not_null())
                    .col(integer(Vehicle::ModelId).not_null())
                    .col(integer_null(Vehicle::VariantId))
                    .col(integer(Vehicle::FueltypeId).not_null())
                    .col(integer_null(Vehicle::BodytypeId))
                    .col(integer_null(Vehicle::TransmissiontypeId))
                    .col(integer(Vehicle::VehicletypeId).not_null())
                    .col(integer(Vehicle::RtoId).not_null())
                    .col(string_len_null(Vehicle::Colour, 32))
                    .col(integer(Vehicle::ManufactureYear).not_null())
                    .col(timestamp_with_time_zone(Vehicle::CreatedAt).not_null())
                    .foreign_key(&mut fk("fk_vehicle_brand", Vehicle::BrandId, Ref::Brand))
                    .foreign_key(&mut fk("fk_vehicle_model", Vehicle::ModelId, Ref::Model))
                    .foreign_key(&mut fk("fk_vehicle_variant", Vehicle::VariantId, Ref::Variant))
                    .foreign_key(&mut fk("fk_vehicle_fueltype", Vehicle::FueltypeId, Ref::Fueltype))
                    .foreign_key(&mut fk("fk_vehicle_bodytype", Vehicle::BodytypeId, Ref::Bodytype))
                    .foreign_key(&mut fk("fk_vehicle_transmissiontype", Vehicle::TransmissiontypeId, Ref::Transmissiontype))
                    .foreign_key(&mut fk("fk_vehicle_vehicletype", Vehicle::VehicletypeId, Ref::Vehicletype))
                    .foreign_key(&mut fk("fk_vehicle_rto", Vehicle::RtoId, Ref::Rto))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

// Catalog rows must not vanish underneath a registered vehicle.
fn fk(name: &str, from: Vehicle, to: Ref) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(Vehicle::Table, from)
        .to(to, Ref::Id)
        .on_delete(ForeignKeyAction::Restrict)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(DeriveIden)]
enum Vehicle {
    Table,
    Id,
    RegistrationNumber,
    ChassisNumber,
    EngineNumber,
    BrandId,
    ModelId,
    VariantId,
    FueltypeId,
    BodytypeId,
    TransmissiontypeId,
    VehicletypeId,
    RtoId,
    Colour,
    ManufactureYear,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Ref { Brand, Model, Variant, Fueltype, Bodytype, Transmissiontype, Vehicletype, Rto, Id }
