//! Create vehicle catalog tables: `brand`, `model`, `variant` and the
//! classification lookups (`fueltype`, `bodytype`, `transmissiontype`, `vehicletype`).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Brand::Table)
                    .if_not_exists()
                    .col(pk_auto(Brand::Id))
                    .col(string_len(Brand::Name, 64).unique_key().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Model::Table)
                    .if_not_exists()
                    .col(pk_auto(Model::Id))
                    .col(integer(Model::BrandId).not_null())
                    .col(string_len(Model::Name, 64).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_model_brand")
                            .from(Model::Table, Model::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Variant::Table)
                    .if_not_exists()
                    .col(pk_auto(Variant::Id))
                    .col(integer(Variant::ModelId).not_null())
                    .col(string_len(Variant::Name, 64).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_variant_model")
                            .from(Variant::Table, Variant::ModelId)
                            .to(Model::Table, Model::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Plain id/name lookups
        for table in [Lookup::Fueltype, Lookup::Bodytype, Lookup::Transmissiontype, Lookup::Vehicletype] {
            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(pk_auto(Lookup::Id))
                        .col(string_len(Lookup::Name, 32).unique_key().not_null())
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [Lookup::Vehicletype, Lookup::Transmissiontype, Lookup::Bodytype, Lookup::Fueltype] {
            manager.drop_table(Table::drop().table(table).to_owned()).await?;
        }
        manager.drop_table(Table::drop().table(Variant::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Model::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Brand::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Brand { Table, Id, Name }

#[derive(DeriveIden)]
enum Model { Table, Id, BrandId, Name }

#[derive(DeriveIden)]
enum Variant { Table, Id, ModelId, Name }

#[derive(DeriveIden, Clone, Copy)]
enum Lookup { Fueltype, Bodytype, Transmissiontype, Vehicletype, Id, Name }
