//! Customer portal: domain types, per-entity repositories, the portal service
//! and the request controller that turns service results into outcomes.
//!
//! Layering follows the same split as the rest of the crate:
//! `domain` -> `repository` (+ `repo` adapters) -> `service` -> `controller`.

pub mod controller;
pub mod domain;
pub mod errors;
pub mod password;
pub mod repo;
pub mod repository;
pub mod service;

pub use controller::{Outcome, PortalController};
pub use errors::PortalError;
pub use service::{CustomerPortal, PortalService};
