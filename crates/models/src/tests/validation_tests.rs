use crate::errors::ModelError;
use crate::policy;
use crate::portal_user::{validate_email, validate_username};
use chrono::NaiveDate;

#[test]
fn username_must_not_be_blank() {
    assert!(matches!(validate_username("   "), Err(ModelError::Validation(_))));
    assert!(validate_username("asha").is_ok());
}

#[test]
fn username_length_is_capped() {
    let long = "u".repeat(65);
    assert!(validate_username(&long).is_err());
    assert!(validate_username(&"u".repeat(64)).is_ok());
}

#[test]
fn email_requires_at_sign() {
    assert!(validate_email("asha.example.com").is_err());
    assert!(validate_email("asha@example.com").is_ok());
}

#[test]
fn db_error_converts_to_model_error() {
    let e: ModelError = sea_orm::DbErr::Custom("boom".into()).into();
    assert_eq!(e.to_string(), "database error: Custom Error: boom");
}

#[test]
fn policy_number_premium_and_term_are_checked() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    assert!(policy::validate(1001, start, end, 5400.0).is_ok());
    assert!(policy::validate(0, start, end, 5400.0).is_err());
    assert!(policy::validate(1001, start, end, -0.5).is_err());
    assert!(policy::validate(1001, start, end, f64::INFINITY).is_err());
    assert!(matches!(policy::validate(1001, end, start, 5400.0), Err(ModelError::Validation(_))));
}
