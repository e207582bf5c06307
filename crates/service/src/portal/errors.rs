use thiserror::Error;
use uuid::Uuid;

use models::errors::ModelError;

/// Failures raised by portal operations.
///
/// Absence is not an error here: lookups return `Ok(None)` and the controller
/// maps that to a not-found outcome. Everything below surfaces to the caller
/// as a bad request carrying `to_string()`.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("user {0} not found")]
    UnknownUser(Uuid),
    #[error("PolicyNumber {0} is already added for this user")]
    AlreadyAttached(i32),
    #[error("data integrity error: {0}")]
    Integrity(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl PortalError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            PortalError::Validation(_) => 2001,
            PortalError::UnknownUser(_) => 2002,
            PortalError::AlreadyAttached(_) => 2003,
            PortalError::Integrity(_) => 2101,
            PortalError::Hash(_) => 2102,
            PortalError::Repository(_) => 2200,
        }
    }
}

impl From<ModelError> for PortalError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => PortalError::Validation(msg),
            ModelError::Db(msg) => PortalError::Repository(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_category() {
        let v: PortalError = ModelError::Validation("bad".into()).into();
        assert!(matches!(v, PortalError::Validation(ref m) if m == "bad"));
        let d: PortalError = ModelError::Db("down".into()).into();
        assert_eq!(d.to_string(), "repository error: down");
        assert_eq!(d.code(), 2200);
    }

    #[test]
    fn already_attached_message_names_the_policy() {
        assert_eq!(PortalError::AlreadyAttached(42).to_string(), "PolicyNumber 42 is already added for this user");
    }
}
