//! Service layer for the customer portal.
//! - Repository traits separate business rules from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - The controller reduces every result to an `Outcome`.

pub mod portal;
#[cfg(test)]
pub mod test_support;
