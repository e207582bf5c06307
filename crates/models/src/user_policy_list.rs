use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryOrder};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{policy, portal_user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_policy_list")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub policy_number: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { PortalUser, Policy }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PortalUser => Entity::belongs_to(portal_user::Entity).from(Column::UserId).to(portal_user::Column::Id).into(),
            Relation::Policy => Entity::belongs_to(policy::Entity).from(Column::PolicyNumber).to(policy::Column::PolicyNumber).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, user_id: Uuid, policy_number: i32) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        policy_number: Set(policy_number),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Oldest attachment first.
pub async fn list_by_user(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Remove every attachment of `policy_number`; returns the number of rows removed.
pub async fn delete_by_policy_number(db: &DatabaseConnection, policy_number: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::PolicyNumber.eq(policy_number))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
