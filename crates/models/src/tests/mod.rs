/// Field validation helpers (no database required)
pub mod validation_tests;

/// CRUD round trips against Postgres; skipped when no database is reachable
pub mod crud_tests;
