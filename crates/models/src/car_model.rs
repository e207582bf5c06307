use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::brand;

/// A brand's model line (table `model`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Brand }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Brand => Entity::belongs_to(brand::Entity).from(Column::BrandId).to(brand::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}
