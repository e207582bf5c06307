use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{policy, vehicle};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "policyvehicle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub policy_number: i32,
    pub vehicle_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Policy, Vehicle }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Policy => Entity::belongs_to(policy::Entity).from(Column::PolicyNumber).to(policy::Column::PolicyNumber).into(),
            Relation::Vehicle => Entity::belongs_to(vehicle::Entity).from(Column::VehicleId).to(vehicle::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, policy_number: i32, vehicle_id: Uuid) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        policy_number: Set(policy_number),
        vehicle_id: Set(vehicle_id),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_policy_number(db: &DatabaseConnection, policy_number: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::PolicyNumber.eq(policy_number))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
