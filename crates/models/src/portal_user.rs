use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portal_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_username(username: &str) -> Result<(), errors::ModelError> {
    let u = username.trim();
    if u.is_empty() { return Err(errors::ModelError::Validation("username required".into())); }
    if u.len() > 64 { return Err(errors::ModelError::Validation("username too long (<=64)".into())); }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') { return Err(errors::ModelError::Validation("invalid email".into())); }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    full_name: &str,
    password_hash: String,
) -> Result<Model, errors::ModelError> {
    validate_username(username)?;
    validate_email(email)?;
    if password_hash.trim().is_empty() { return Err(errors::ModelError::Validation("password hash required".into())); }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.trim().to_string()),
        email: Set(email.to_string()),
        full_name: Set(full_name.to_string()),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Username.eq(username.trim()))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
