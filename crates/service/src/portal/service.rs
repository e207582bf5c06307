use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::domain::{CatalogKind, Policy, PolicyVehicle, PortalUser, UserPolicyList, Vehicle, VehicleDto};
use super::errors::PortalError;
use super::password::verify_password;
use super::repository::PortalRepository;

/// Confirmation returned when at least one attachment was removed.
pub const DELETED_CONFIRMATION: &str = "Deleted Successfully";

/// Operations the request controller consumes.
///
/// Absence is `Ok(None)` (or an empty list); only real failures are `Err`.
#[async_trait]
pub trait CustomerPortal: Send + Sync {
    async fn validate_login(&self, username: &str, password: &str) -> Result<Option<PortalUser>, PortalError>;
    async fn validate_policy_number(&self, policy_number: i32) -> Result<Option<Policy>, PortalError>;
    async fn get_policy_vehicle_record(&self, policy_number: i32) -> Result<Option<PolicyVehicle>, PortalError>;
    async fn validate_chassis_number(&self, record: &PolicyVehicle, chassis_number: &str) -> Result<Option<Vehicle>, PortalError>;
    async fn add_policy_number_to_policy_list(&self, user_id: Uuid, policy_number: i32) -> Result<UserPolicyList, PortalError>;
    async fn get_policy_numbers_of_user(&self, user_id: Uuid) -> Result<Vec<UserPolicyList>, PortalError>;
    async fn get_vehicle(&self, policy_number: i32) -> Result<Option<VehicleDto>, PortalError>;
    async fn delete_policy_number(&self, policy_number: i32) -> Result<Option<String>, PortalError>;
}

/// Portal business service over any backing store.
pub struct PortalService<R: PortalRepository> {
    repo: Arc<R>,
}

impl<R: PortalRepository> PortalService<R> {
    /// Wrap a repository.
    ///
    /// # Examples
    /// ```
    /// use service::portal::{CustomerPortal, PortalService};
    /// use service::portal::repo::memory::InMemoryPortalRepository;
    /// use std::sync::Arc;
    /// let repo = Arc::new(InMemoryPortalRepository::new());
    /// tokio_test::block_on(repo.insert_user("asha", "asha@example.com", "Asha Rao", "Passw0rd")).unwrap();
    /// let svc = PortalService::new(repo);
    /// let user = tokio_test::block_on(svc.validate_login("asha", "Passw0rd")).unwrap();
    /// assert_eq!(user.map(|u| u.username), Some("asha".to_string()));
    /// assert!(tokio_test::block_on(svc.validate_login("asha", "nope")).unwrap().is_none());
    /// ```
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    async fn required_name(&self, kind: CatalogKind, id: i32) -> Result<String, PortalError> {
        self.repo
            .catalog_name(kind, id)
            .await?
            .ok_or_else(|| PortalError::Integrity(format!("{} {} referenced by vehicle is missing", kind.as_str(), id)))
    }

    async fn optional_name(&self, kind: CatalogKind, id: Option<i32>) -> Result<Option<String>, PortalError> {
        match id {
            Some(id) => self.repo.catalog_name(kind, id).await,
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<R: PortalRepository + 'static> CustomerPortal for PortalService<R> {
    /// `None` for an unknown username or a wrong password.
    #[instrument(skip(self, password))]
    async fn validate_login(&self, username: &str, password: &str) -> Result<Option<PortalUser>, PortalError> {
        let Some(record) = self.repo.find_user_by_username(username).await? else {
            debug!("unknown username");
            return Ok(None);
        };
        if !verify_password(password, &record.password_hash)? {
            debug!(user_id = %record.user.id, "password mismatch");
            return Ok(None);
        }
        info!(user_id = %record.user.id, "login_validated");
        Ok(Some(record.user))
    }

    #[instrument(skip(self))]
    async fn validate_policy_number(&self, policy_number: i32) -> Result<Option<Policy>, PortalError> {
        self.repo.find_policy(policy_number).await
    }

    #[instrument(skip(self))]
    async fn get_policy_vehicle_record(&self, policy_number: i32) -> Result<Option<PolicyVehicle>, PortalError> {
        self.repo.find_by_policy_number(policy_number).await
    }

    #[instrument(skip(self, record, chassis_number), fields(policy_number = record.policy_number, vehicle_id = %record.vehicle_id))]
    async fn validate_chassis_number(&self, record: &PolicyVehicle, chassis_number: &str) -> Result<Option<Vehicle>, PortalError> {
        let chassis = chassis_number.trim();
        if chassis.is_empty() {
            return Ok(None);
        }
        self.repo.find_vehicle_with_chassis(record.vehicle_id, chassis).await
    }

    #[instrument(skip(self))]
    async fn add_policy_number_to_policy_list(&self, user_id: Uuid, policy_number: i32) -> Result<UserPolicyList, PortalError> {
        if !self.repo.user_exists(user_id).await? {
            return Err(PortalError::UnknownUser(user_id));
        }
        let existing = self.repo.list_for_user(user_id).await?;
        if existing.iter().any(|e| e.policy_number == policy_number) {
            warn!("policy already attached");
            return Err(PortalError::AlreadyAttached(policy_number));
        }
        let created = self.repo.attach(user_id, policy_number).await?;
        info!(attachment_id = %created.id, "policy_attached");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_policy_numbers_of_user(&self, user_id: Uuid) -> Result<Vec<UserPolicyList>, PortalError> {
        let list = self.repo.list_for_user(user_id).await?;
        debug!(count = list.len(), "listed user policies");
        Ok(list)
    }

    #[instrument(skip(self))]
    async fn get_vehicle(&self, policy_number: i32) -> Result<Option<VehicleDto>, PortalError> {
        let Some(link) = self.repo.find_by_policy_number(policy_number).await? else {
            return Ok(None);
        };
        let vehicle = self
            .repo
            .find_vehicle(link.vehicle_id)
            .await?
            .ok_or_else(|| PortalError::Integrity(format!("vehicle {} linked to policy {} is missing", link.vehicle_id, policy_number)))?;
        let rto = self
            .repo
            .find_rto(vehicle.rto_id)
            .await?
            .ok_or_else(|| PortalError::Integrity(format!("rto {} referenced by vehicle is missing", vehicle.rto_id)))?;

        Ok(Some(VehicleDto {
            policy_number,
            brand: self.required_name(CatalogKind::Brand, vehicle.brand_id).await?,
            model: self.required_name(CatalogKind::Model, vehicle.model_id).await?,
            variant: self.optional_name(CatalogKind::Variant, vehicle.variant_id).await?,
            fuel_type: self.required_name(CatalogKind::FuelType, vehicle.fueltype_id).await?,
            body_type: self.optional_name(CatalogKind::BodyType, vehicle.bodytype_id).await?,
            transmission_type: self.optional_name(CatalogKind::TransmissionType, vehicle.transmissiontype_id).await?,
            vehicle_type: self.required_name(CatalogKind::VehicleType, vehicle.vehicletype_id).await?,
            rto_code: rto.code,
            rto_location: format!("{}, {}", rto.city, rto.state),
            registration_number: vehicle.registration_number,
            chassis_number: vehicle.chassis_number,
            engine_number: vehicle.engine_number,
            colour: vehicle.colour,
            manufacture_year: vehicle.manufacture_year,
        }))
    }

    #[instrument(skip(self))]
    async fn delete_policy_number(&self, policy_number: i32) -> Result<Option<String>, PortalError> {
        let removed = self.repo.detach_policy_number(policy_number).await?;
        if removed == 0 {
            return Ok(None);
        }
        info!(removed, "policy_detached");
        Ok(Some(DELETED_CONFIRMATION.to_string()))
    }
}
