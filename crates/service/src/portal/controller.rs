//! Request controller: runs each portal operation against a [`CustomerPortal`]
//! and reduces the result to an [`Outcome`].
//!
//! Every error raised by the portal stops the operation and becomes
//! `Outcome::BadRequest(Some(error text))`; nothing propagates past here.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{PortalUser, UserPolicyList, VehicleDto};
use super::errors::PortalError;
use super::service::CustomerPortal;

pub const MSG_NO_SUCH_POLICY: &str = "No Such PolicyNumber Exists";
pub const MSG_NO_VEHICLE_FOR_POLICY: &str = "No Vehicle Found For Corresponding PolicyNumber";
pub const MSG_CHASSIS_MISMATCH: &str = "ChasisNumber is not matches";
pub const MSG_NO_POLICIES_FOR_USER: &str = "There is No policyNumber added for corresponding user";

/// Response outcome of a portal operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Ok(T),
    NotFound(Option<String>),
    BadRequest(Option<String>),
}

impl<T> Outcome<T> {
    fn not_found(msg: &str) -> Self { Outcome::NotFound(Some(msg.to_string())) }

    fn failed(e: PortalError) -> Self {
        warn!(code = e.code(), error = %e, "portal operation failed");
        Outcome::BadRequest(Some(e.to_string()))
    }

    pub fn is_ok(&self) -> bool { matches!(self, Outcome::Ok(_)) }
}

#[derive(Clone)]
pub struct PortalController {
    portal: Arc<dyn CustomerPortal>,
}

impl PortalController {
    pub fn new(portal: Arc<dyn CustomerPortal>) -> Self { Self { portal } }

    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Outcome<PortalUser> {
        match self.portal.validate_login(username, password).await {
            Ok(Some(user)) => Outcome::Ok(user),
            Ok(None) => Outcome::NotFound(None),
            Err(e) => Outcome::failed(e),
        }
    }

    /// Attach `policy_number` to the user after the policy, its vehicle link
    /// and the chassis number all check out, in that order.
    #[instrument(skip(self, chassis_number))]
    pub async fn add_policy_number(&self, user_id: Uuid, policy_number: i32, chassis_number: &str) -> Outcome<UserPolicyList> {
        match self.attach(user_id, policy_number, chassis_number).await {
            Ok(outcome) => outcome,
            Err(e) => Outcome::failed(e),
        }
    }

    async fn attach(&self, user_id: Uuid, policy_number: i32, chassis_number: &str) -> Result<Outcome<UserPolicyList>, PortalError> {
        if self.portal.validate_policy_number(policy_number).await?.is_none() {
            return Ok(Outcome::not_found(MSG_NO_SUCH_POLICY));
        }
        let Some(record) = self.portal.get_policy_vehicle_record(policy_number).await? else {
            return Ok(Outcome::not_found(MSG_NO_VEHICLE_FOR_POLICY));
        };
        if self.portal.validate_chassis_number(&record, chassis_number).await?.is_none() {
            return Ok(Outcome::not_found(MSG_CHASSIS_MISMATCH));
        }
        let created = self.portal.add_policy_number_to_policy_list(user_id, policy_number).await?;
        info!(attachment_id = %created.id, "policy number added to user list");
        Ok(Outcome::Ok(created))
    }

    #[instrument(skip(self))]
    pub async fn get_policy_numbers(&self, user_id: Uuid) -> Outcome<Vec<UserPolicyList>> {
        match self.portal.get_policy_numbers_of_user(user_id).await {
            Ok(list) if list.is_empty() => Outcome::not_found(MSG_NO_POLICIES_FOR_USER),
            Ok(list) => Outcome::Ok(list),
            Err(e) => Outcome::failed(e),
        }
    }

    /// Whatever the portal returns is a success, including no vehicle.
    #[instrument(skip(self))]
    pub async fn get_vehicle_details(&self, policy_number: i32) -> Outcome<Option<VehicleDto>> {
        match self.portal.get_vehicle(policy_number).await {
            Ok(details) => Outcome::Ok(details),
            Err(e) => Outcome::failed(e),
        }
    }

    /// An empty or missing confirmation is a bad request without a message,
    /// unlike a raised error which carries its text.
    #[instrument(skip(self))]
    pub async fn delete_policy_number(&self, policy_number: i32) -> Outcome<String> {
        match self.portal.delete_policy_number(policy_number).await {
            Ok(Some(confirmation)) if !confirmation.is_empty() => Outcome::Ok(confirmation),
            Ok(_) => Outcome::BadRequest(None),
            Err(e) => Outcome::failed(e),
        }
    }
}
