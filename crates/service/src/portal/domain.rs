use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Attach-policy input; the user id comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachPolicyInput {
    pub policy_number: i32,
    pub chassis_number: String,
}

/// Credential-validated portal user (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// Stored user row together with its Argon2 hash
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: PortalUser,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub policy_number: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium: f64,
    pub status: String,
}

/// Link between a policy number and the vehicle it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyVehicle {
    pub id: Uuid,
    pub policy_number: i32,
    pub vehicle_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub registration_number: String,
    pub chassis_number: String,
    pub engine_number: String,
    pub brand_id: i32,
    pub model_id: i32,
    #[serde(default)]
    pub variant_id: Option<i32>,
    pub fueltype_id: i32,
    #[serde(default)]
    pub bodytype_id: Option<i32>,
    #[serde(default)]
    pub transmissiontype_id: Option<i32>,
    pub vehicletype_id: i32,
    pub rto_id: i32,
    #[serde(default)]
    pub colour: Option<String>,
    pub manufacture_year: i32,
}

/// A user's attachment of a policy number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPolicyList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub policy_number: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rto {
    pub id: i32,
    pub code: String,
    pub city: String,
    pub state: String,
}

/// Reference tables whose rows are plain `(id, name)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Brand,
    Model,
    Variant,
    FuelType,
    BodyType,
    TransmissionType,
    VehicleType,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Brand => "brand",
            CatalogKind::Model => "model",
            CatalogKind::Variant => "variant",
            CatalogKind::FuelType => "fueltype",
            CatalogKind::BodyType => "bodytype",
            CatalogKind::TransmissionType => "transmissiontype",
            CatalogKind::VehicleType => "vehicletype",
        }
    }
}

/// Vehicle read-model shown on the policy page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDto {
    pub policy_number: i32,
    pub registration_number: String,
    pub chassis_number: String,
    pub engine_number: String,
    pub brand: String,
    pub model: String,
    pub variant: Option<String>,
    pub fuel_type: String,
    pub body_type: Option<String>,
    pub transmission_type: Option<String>,
    pub vehicle_type: String,
    pub rto_code: String,
    pub rto_location: String,
    pub colour: Option<String>,
    pub manufacture_year: i32,
}

impl From<models::portal_user::Model> for UserRecord {
    fn from(m: models::portal_user::Model) -> Self {
        UserRecord {
            user: PortalUser {
                id: m.id,
                username: m.username,
                email: m.email,
                full_name: m.full_name,
                created_at: m.created_at.with_timezone(&Utc),
            },
            password_hash: m.password_hash,
        }
    }
}

impl From<models::policy::Model> for Policy {
    fn from(m: models::policy::Model) -> Self {
        Policy { policy_number: m.policy_number, start_date: m.start_date, end_date: m.end_date, premium: m.premium, status: m.status }
    }
}

impl From<models::policyvehicle::Model> for PolicyVehicle {
    fn from(m: models::policyvehicle::Model) -> Self {
        PolicyVehicle { id: m.id, policy_number: m.policy_number, vehicle_id: m.vehicle_id }
    }
}

impl From<models::vehicle::Model> for Vehicle {
    fn from(m: models::vehicle::Model) -> Self {
        Vehicle {
            id: m.id,
            registration_number: m.registration_number,
            chassis_number: m.chassis_number,
            engine_number: m.engine_number,
            brand_id: m.brand_id,
            model_id: m.model_id,
            variant_id: m.variant_id,
            fueltype_id: m.fueltype_id,
            bodytype_id: m.bodytype_id,
            transmissiontype_id: m.transmissiontype_id,
            vehicletype_id: m.vehicletype_id,
            rto_id: m.rto_id,
            colour: m.colour,
            manufacture_year: m.manufacture_year,
        }
    }
}

impl From<models::user_policy_list::Model> for UserPolicyList {
    fn from(m: models::user_policy_list::Model) -> Self {
        UserPolicyList { id: m.id, user_id: m.user_id, policy_number: m.policy_number, created_at: m.created_at.with_timezone(&Utc) }
    }
}

impl From<models::rto::Model> for Rto {
    fn from(m: models::rto::Model) -> Self {
        Rto { id: m.id, code: m.code, city: m.city, state: m.state }
    }
}
