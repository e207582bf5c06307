use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{CatalogKind, Policy, PolicyVehicle, Rto, UserPolicyList, UserRecord, Vehicle};
use super::errors::PortalError;

/// Portal user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<UserRecord>, PortalError>;
    async fn user_exists(&self, user_id: Uuid) -> Result<bool, PortalError>;
}

#[async_trait]
pub trait PolicyRepository: Send + Sync {
    async fn find_policy(&self, policy_number: i32) -> Result<Option<Policy>, PortalError>;
}

/// Policy-to-vehicle links.
#[async_trait]
pub trait PolicyVehicleRepository: Send + Sync {
    async fn find_by_policy_number(&self, policy_number: i32) -> Result<Option<PolicyVehicle>, PortalError>;
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_vehicle(&self, id: Uuid) -> Result<Option<Vehicle>, PortalError>;
    /// The vehicle only when its chassis number equals `chassis_number`.
    async fn find_vehicle_with_chassis(&self, id: Uuid, chassis_number: &str) -> Result<Option<Vehicle>, PortalError>;
}

/// User-to-policy attachments.
#[async_trait]
pub trait UserPolicyListRepository: Send + Sync {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserPolicyList>, PortalError>;
    async fn attach(&self, user_id: Uuid, policy_number: i32) -> Result<UserPolicyList, PortalError>;
    /// Detach `policy_number` from every user; returns how many links were removed.
    async fn detach_policy_number(&self, policy_number: i32) -> Result<u64, PortalError>;
}

/// Read-only reference data used to render vehicle details.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn catalog_name(&self, kind: CatalogKind, id: i32) -> Result<Option<String>, PortalError>;
    async fn find_rto(&self, id: i32) -> Result<Option<Rto>, PortalError>;
}

/// Everything the portal service needs from a backing store.
pub trait PortalRepository:
    UserRepository + PolicyRepository + PolicyVehicleRepository + VehicleRepository + UserPolicyListRepository + CatalogRepository
{
}

impl<T> PortalRepository for T where
    T: UserRepository + PolicyRepository + PolicyVehicleRepository + VehicleRepository + UserPolicyListRepository + CatalogRepository
{
}
