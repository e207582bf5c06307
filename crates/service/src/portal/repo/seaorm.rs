use sea_orm::{DatabaseConnection, EntityTrait, ColumnTrait, QueryFilter, PaginatorTrait};
use uuid::Uuid;

use crate::portal::domain::{CatalogKind, Policy, PolicyVehicle, Rto, UserPolicyList, UserRecord, Vehicle};
use crate::portal::errors::PortalError;
use crate::portal::repository::{
    CatalogRepository, PolicyRepository, PolicyVehicleRepository, UserPolicyListRepository, UserRepository, VehicleRepository,
};

fn db_err(e: sea_orm::DbErr) -> PortalError { PortalError::Repository(e.to_string()) }

/// Postgres-backed adapter implementing every portal repository.
#[derive(Clone)]
pub struct SeaOrmPortalRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPortalRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmPortalRepository {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<UserRecord>, PortalError> {
        let res = models::portal_user::find_by_username(&self.db, username).await?;
        Ok(res.map(UserRecord::from))
    }

    async fn user_exists(&self, user_id: Uuid) -> Result<bool, PortalError> {
        let n = models::portal_user::Entity::find()
            .filter(models::portal_user::Column::Id.eq(user_id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(n > 0)
    }
}

#[async_trait::async_trait]
impl PolicyRepository for SeaOrmPortalRepository {
    async fn find_policy(&self, policy_number: i32) -> Result<Option<Policy>, PortalError> {
        let res = models::policy::Entity::find_by_id(policy_number)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(res.map(Policy::from))
    }
}

#[async_trait::async_trait]
impl PolicyVehicleRepository for SeaOrmPortalRepository {
    async fn find_by_policy_number(&self, policy_number: i32) -> Result<Option<PolicyVehicle>, PortalError> {
        let res = models::policyvehicle::find_by_policy_number(&self.db, policy_number).await?;
        Ok(res.map(PolicyVehicle::from))
    }
}

#[async_trait::async_trait]
impl VehicleRepository for SeaOrmPortalRepository {
    async fn find_vehicle(&self, id: Uuid) -> Result<Option<Vehicle>, PortalError> {
        let res = models::vehicle::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(res.map(Vehicle::from))
    }

    async fn find_vehicle_with_chassis(&self, id: Uuid, chassis_number: &str) -> Result<Option<Vehicle>, PortalError> {
        let res = models::vehicle::find_by_id_and_chassis(&self.db, id, chassis_number).await?;
        Ok(res.map(Vehicle::from))
    }
}

#[async_trait::async_trait]
impl UserPolicyListRepository for SeaOrmPortalRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserPolicyList>, PortalError> {
        let rows = models::user_policy_list::list_by_user(&self.db, user_id).await?;
        Ok(rows.into_iter().map(UserPolicyList::from).collect())
    }

    async fn attach(&self, user_id: Uuid, policy_number: i32) -> Result<UserPolicyList, PortalError> {
        let created = models::user_policy_list::create(&self.db, user_id, policy_number).await?;
        Ok(UserPolicyList::from(created))
    }

    async fn detach_policy_number(&self, policy_number: i32) -> Result<u64, PortalError> {
        Ok(models::user_policy_list::delete_by_policy_number(&self.db, policy_number).await?)
    }
}

#[async_trait::async_trait]
impl CatalogRepository for SeaOrmPortalRepository {
    async fn catalog_name(&self, kind: CatalogKind, id: i32) -> Result<Option<String>, PortalError> {
        let db = &self.db;
        let name = match kind {
            CatalogKind::Brand => models::brand::Entity::find_by_id(id).one(db).await.map_err(db_err)?.map(|m| m.name),
            CatalogKind::Model => models::car_model::Entity::find_by_id(id).one(db).await.map_err(db_err)?.map(|m| m.name),
            CatalogKind::Variant => models::variant::Entity::find_by_id(id).one(db).await.map_err(db_err)?.map(|m| m.name),
            CatalogKind::FuelType => models::fueltype::Entity::find_by_id(id).one(db).await.map_err(db_err)?.map(|m| m.name),
            CatalogKind::BodyType => models::bodytype::Entity::find_by_id(id).one(db).await.map_err(db_err)?.map(|m| m.name),
            CatalogKind::TransmissionType => {
                models::transmissiontype::Entity::find_by_id(id).one(db).await.map_err(db_err)?.map(|m| m.name)
            }
            CatalogKind::VehicleType => models::vehicletype::Entity::find_by_id(id).one(db).await.map_err(db_err)?.map(|m| m.name),
        };
        Ok(name)
    }

    async fn find_rto(&self, id: i32) -> Result<Option<Rto>, PortalError> {
        let res = models::rto::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(res.map(Rto::from))
    }
}
