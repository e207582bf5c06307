//! In-memory adapter for local runs and tests.
//!
//! State lives behind a single `RwLock`; a JSON seed (see [`PortalSeed`]) can
//! populate it at startup. Nothing is written back to disk.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tokio::{fs, sync::RwLock};
use tracing::info;
use uuid::Uuid;

use crate::portal::domain::{CatalogKind, Policy, PolicyVehicle, PortalUser, Rto, UserPolicyList, UserRecord, Vehicle};
use crate::portal::errors::PortalError;
use crate::portal::password::hash_password;
use crate::portal::repository::{
    CatalogRepository, PolicyRepository, PolicyVehicleRepository, UserPolicyListRepository, UserRepository, VehicleRepository,
};

#[derive(Default)]
struct MemoryState {
    users: HashMap<Uuid, UserRecord>,
    policies: BTreeMap<i32, Policy>,
    policy_vehicles: Vec<PolicyVehicle>,
    vehicles: HashMap<Uuid, Vehicle>,
    catalog: HashMap<(CatalogKind, i32), String>,
    rtos: HashMap<i32, Rto>,
    attachments: Vec<UserPolicyList>,
}

#[derive(Default)]
pub struct InMemoryPortalRepository {
    state: RwLock<MemoryState>,
}

/// `(id, name)` row of a reference table.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// Plain text; hashed on load.
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedPolicyVehicle {
    pub policy_number: i32,
    pub vehicle_id: Uuid,
}

/// Seed document for [`InMemoryPortalRepository::from_seed`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PortalSeed {
    pub users: Vec<SeedUser>,
    pub brands: Vec<NamedRow>,
    pub models: Vec<NamedRow>,
    pub variants: Vec<NamedRow>,
    pub fuel_types: Vec<NamedRow>,
    pub body_types: Vec<NamedRow>,
    pub transmission_types: Vec<NamedRow>,
    pub vehicle_types: Vec<NamedRow>,
    pub rtos: Vec<Rto>,
    pub vehicles: Vec<Vehicle>,
    pub policies: Vec<Policy>,
    pub policy_vehicles: Vec<SeedPolicyVehicle>,
}

impl InMemoryPortalRepository {
    pub fn new() -> Self { Self::default() }

    /// Build a store from a parsed seed, hashing user passwords.
    pub async fn from_seed(seed: PortalSeed) -> Result<Self, PortalError> {
        let repo = Self::new();
        for u in &seed.users {
            repo.insert_user_with_id(u.id.unwrap_or_else(Uuid::new_v4), &u.username, &u.email, &u.full_name, &u.password).await?;
        }
        let tables = [
            (CatalogKind::Brand, &seed.brands),
            (CatalogKind::Model, &seed.models),
            (CatalogKind::Variant, &seed.variants),
            (CatalogKind::FuelType, &seed.fuel_types),
            (CatalogKind::BodyType, &seed.body_types),
            (CatalogKind::TransmissionType, &seed.transmission_types),
            (CatalogKind::VehicleType, &seed.vehicle_types),
        ];
        for (kind, rows) in tables {
            for row in rows {
                repo.insert_catalog(kind, row.id, &row.name).await;
            }
        }
        for r in seed.rtos { repo.insert_rto(r).await; }
        for v in seed.vehicles { repo.insert_vehicle(v).await?; }
        for p in seed.policies { repo.insert_policy(p).await?; }
        for link in seed.policy_vehicles { repo.link_vehicle(link.policy_number, link.vehicle_id).await?; }
        Ok(repo)
    }

    /// Read a JSON seed file and build the store.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, PortalError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .await
            .map_err(|e| PortalError::Repository(format!("cannot read seed {}: {e}", path.display())))?;
        let seed: PortalSeed = serde_json::from_slice(&bytes)
            .map_err(|e| PortalError::Validation(format!("invalid seed {}: {e}", path.display())))?;
        let repo = Self::from_seed(seed).await?;
        info!(path = %path.display(), "in-memory portal store seeded");
        Ok(repo)
    }

    pub async fn insert_user(&self, username: &str, email: &str, full_name: &str, password: &str) -> Result<PortalUser, PortalError> {
        self.insert_user_with_id(Uuid::new_v4(), username, email, full_name, password).await
    }

    async fn insert_user_with_id(&self, id: Uuid, username: &str, email: &str, full_name: &str, password: &str) -> Result<PortalUser, PortalError> {
        models::portal_user::validate_username(username)?;
        models::portal_user::validate_email(email)?;
        let password_hash = hash_password(password)?;
        let mut st = self.state.write().await;
        if st.users.contains_key(&id) {
            return Err(PortalError::Validation(format!("user id {id} already taken")));
        }
        if st.users.values().any(|r| r.user.username == username.trim()) {
            return Err(PortalError::Validation(format!("username {} already taken", username.trim())));
        }
        let user = PortalUser {
            id,
            username: username.trim().to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            created_at: Utc::now(),
        };
        st.users.insert(id, UserRecord { user: user.clone(), password_hash });
        Ok(user)
    }

    pub async fn insert_policy(&self, policy: Policy) -> Result<(), PortalError> {
        models::policy::validate(policy.policy_number, policy.start_date, policy.end_date, policy.premium)?;
        self.state.write().await.policies.insert(policy.policy_number, policy);
        Ok(())
    }

    /// Active policy with a one-year term; handy for tests.
    pub async fn insert_simple_policy(&self, policy_number: i32) -> Result<(), PortalError> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or_else(|| PortalError::Validation("bad date".into()))?;
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).ok_or_else(|| PortalError::Validation("bad date".into()))?;
        self.insert_policy(Policy { policy_number, start_date: start, end_date: end, premium: 5400.0, status: "active".into() }).await
    }

    pub async fn insert_vehicle(&self, vehicle: Vehicle) -> Result<(), PortalError> {
        let mut st = self.state.write().await;
        if st.vehicles.values().any(|v| v.chassis_number == vehicle.chassis_number && v.id != vehicle.id) {
            return Err(PortalError::Validation(format!("chassis number {} already registered", vehicle.chassis_number)));
        }
        st.vehicles.insert(vehicle.id, vehicle);
        Ok(())
    }

    pub async fn link_vehicle(&self, policy_number: i32, vehicle_id: Uuid) -> Result<PolicyVehicle, PortalError> {
        let mut st = self.state.write().await;
        if !st.policies.contains_key(&policy_number) {
            return Err(PortalError::Integrity(format!("policy {policy_number} does not exist")));
        }
        if !st.vehicles.contains_key(&vehicle_id) {
            return Err(PortalError::Integrity(format!("vehicle {vehicle_id} does not exist")));
        }
        let link = PolicyVehicle { id: Uuid::new_v4(), policy_number, vehicle_id };
        st.policy_vehicles.push(link.clone());
        Ok(link)
    }

    pub async fn insert_catalog(&self, kind: CatalogKind, id: i32, name: &str) {
        self.state.write().await.catalog.insert((kind, id), name.to_string());
    }

    pub async fn insert_rto(&self, rto: Rto) {
        self.state.write().await.rtos.insert(rto.id, rto);
    }
}

#[async_trait]
impl UserRepository for InMemoryPortalRepository {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<UserRecord>, PortalError> {
        let st = self.state.read().await;
        Ok(st.users.values().find(|r| r.user.username == username.trim()).cloned())
    }

    async fn user_exists(&self, user_id: Uuid) -> Result<bool, PortalError> {
        Ok(self.state.read().await.users.contains_key(&user_id))
    }
}

#[async_trait]
impl PolicyRepository for InMemoryPortalRepository {
    async fn find_policy(&self, policy_number: i32) -> Result<Option<Policy>, PortalError> {
        Ok(self.state.read().await.policies.get(&policy_number).cloned())
    }
}

#[async_trait]
impl PolicyVehicleRepository for InMemoryPortalRepository {
    async fn find_by_policy_number(&self, policy_number: i32) -> Result<Option<PolicyVehicle>, PortalError> {
        let st = self.state.read().await;
        Ok(st.policy_vehicles.iter().find(|l| l.policy_number == policy_number).cloned())
    }
}

#[async_trait]
impl VehicleRepository for InMemoryPortalRepository {
    async fn find_vehicle(&self, id: Uuid) -> Result<Option<Vehicle>, PortalError> {
        Ok(self.state.read().await.vehicles.get(&id).cloned())
    }

    async fn find_vehicle_with_chassis(&self, id: Uuid, chassis_number: &str) -> Result<Option<Vehicle>, PortalError> {
        let st = self.state.read().await;
        Ok(st.vehicles.get(&id).filter(|v| v.chassis_number == chassis_number.trim()).cloned())
    }
}

#[async_trait]
impl UserPolicyListRepository for InMemoryPortalRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserPolicyList>, PortalError> {
        let st = self.state.read().await;
        Ok(st.attachments.iter().filter(|a| a.user_id == user_id).cloned().collect())
    }

    async fn attach(&self, user_id: Uuid, policy_number: i32) -> Result<UserPolicyList, PortalError> {
        let mut st = self.state.write().await;
        if !st.users.contains_key(&user_id) {
            return Err(PortalError::UnknownUser(user_id));
        }
        if st.attachments.iter().any(|a| a.user_id == user_id && a.policy_number == policy_number) {
            return Err(PortalError::AlreadyAttached(policy_number));
        }
        let entry = UserPolicyList { id: Uuid::new_v4(), user_id, policy_number, created_at: Utc::now() };
        st.attachments.push(entry.clone());
        Ok(entry)
    }

    async fn detach_policy_number(&self, policy_number: i32) -> Result<u64, PortalError> {
        let mut st = self.state.write().await;
        let before = st.attachments.len();
        st.attachments.retain(|a| a.policy_number != policy_number);
        Ok((before - st.attachments.len()) as u64)
    }
}

#[async_trait]
impl CatalogRepository for InMemoryPortalRepository {
    async fn catalog_name(&self, kind: CatalogKind, id: i32) -> Result<Option<String>, PortalError> {
        Ok(self.state.read().await.catalog.get(&(kind, id)).cloned())
    }

    async fn find_rto(&self, id: i32) -> Result<Option<Rto>, PortalError> {
        Ok(self.state.read().await.rtos.get(&id).cloned())
    }
}
