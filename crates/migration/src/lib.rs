//! Migrator registering portal migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_catalog;
mod m20240301_000002_create_rto;
mod m20240301_000003_create_vehicle;
mod m20240301_000004_create_policy;
mod m20240301_000005_create_policyvehicle;
mod m20240301_000006_create_portal_user;
mod m20240301_000007_create_user_policy_list;
mod m20240301_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_catalog::Migration),
            Box::new(m20240301_000002_create_rto::Migration),
            Box::new(m20240301_000003_create_vehicle::Migration),
            Box::new(m20240301_000004_create_policy::Migration),
            Box::new(m20240301_000005_create_policyvehicle::Migration),
            Box::new(m20240301_000006_create_portal_user::Migration),
            Box::new(m20240301_000007_create_user_policy_list::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000008_add_indexes::Migration),
        ]
    }
}
