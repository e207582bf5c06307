use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::car_model;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "variant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { CarModel }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::CarModel => Entity::belongs_to(car_model::Entity).from(Column::ModelId).to(car_model::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}
