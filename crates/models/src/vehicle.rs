use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{brand, car_model, rto};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub registration_number: String,
    #[sea_orm(unique)]
    pub chassis_number: String,
    pub engine_number: String,
    pub brand_id: i32,
    pub model_id: i32,
    pub variant_id: Option<i32>,
    pub fueltype_id: i32,
    pub bodytype_id: Option<i32>,
    pub transmissiontype_id: Option<i32>,
    pub vehicletype_id: i32,
    pub rto_id: i32,
    pub colour: Option<String>,
    pub manufacture_year: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Brand, CarModel, Rto }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Brand => Entity::belongs_to(brand::Entity).from(Column::BrandId).to(brand::Column::Id).into(),
            Relation::CarModel => Entity::belongs_to(car_model::Entity).from(Column::ModelId).to(car_model::Column::Id).into(),
            Relation::Rto => Entity::belongs_to(rto::Entity).from(Column::RtoId).to(rto::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Columns required to register a vehicle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewVehicle {
    pub registration_number: String,
    pub chassis_number: String,
    pub engine_number: String,
    pub brand_id: i32,
    pub model_id: i32,
    pub variant_id: Option<i32>,
    pub fueltype_id: i32,
    pub bodytype_id: Option<i32>,
    pub transmissiontype_id: Option<i32>,
    pub vehicletype_id: i32,
    pub rto_id: i32,
    pub colour: Option<String>,
    pub manufacture_year: i32,
}

pub async fn create(db: &DatabaseConnection, v: NewVehicle) -> Result<Model, errors::ModelError> {
    if v.chassis_number.trim().is_empty() { return Err(errors::ModelError::Validation("chassis number required".into())); }
    if v.registration_number.trim().is_empty() { return Err(errors::ModelError::Validation("registration number required".into())); }
    if !(1900..=2100).contains(&v.manufacture_year) { return Err(errors::ModelError::Validation("manufacture year out of range".into())); }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        registration_number: Set(v.registration_number.trim().to_string()),
        chassis_number: Set(v.chassis_number.trim().to_string()),
        engine_number: Set(v.engine_number),
        brand_id: Set(v.brand_id),
        model_id: Set(v.model_id),
        variant_id: Set(v.variant_id),
        fueltype_id: Set(v.fueltype_id),
        bodytype_id: Set(v.bodytype_id),
        transmissiontype_id: Set(v.transmissiontype_id),
        vehicletype_id: Set(v.vehicletype_id),
        rto_id: Set(v.rto_id),
        colour: Set(v.colour),
        manufacture_year: Set(v.manufacture_year),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Vehicle `id` if, and only if, its chassis number equals `chassis_number`.
pub async fn find_by_id_and_chassis(db: &DatabaseConnection, id: Uuid, chassis_number: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .filter(Column::ChassisNumber.eq(chassis_number.trim()))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
