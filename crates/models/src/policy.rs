use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "policy")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub policy_number: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub premium: f64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Checks shared by every store that accepts policies.
pub fn validate(policy_number: i32, start_date: NaiveDate, end_date: NaiveDate, premium: f64) -> Result<(), errors::ModelError> {
    if policy_number <= 0 { return Err(errors::ModelError::Validation("policy number must be positive".into())); }
    if end_date < start_date { return Err(errors::ModelError::Validation("policy ends before it starts".into())); }
    if !premium.is_finite() || premium < 0.0 { return Err(errors::ModelError::Validation("premium must be >= 0".into())); }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    policy_number: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    premium: f64,
) -> Result<Model, errors::ModelError> {
    validate(policy_number, start_date, end_date, premium)?;
    let am = ActiveModel {
        policy_number: Set(policy_number),
        start_date: Set(start_date),
        end_date: Set(end_date),
        premium: Set(premium),
        status: Set("active".into()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
