pub mod errors;
pub mod db;
pub mod brand;
pub mod car_model;
pub mod variant;
pub mod fueltype;
pub mod bodytype;
pub mod transmissiontype;
pub mod vehicletype;
pub mod rto;
pub mod vehicle;
pub mod policy;
pub mod policyvehicle;
pub mod portal_user;
pub mod user_policy_list;

#[cfg(test)]
mod tests;
