//! Repository adapters: Postgres through SeaORM, and an in-memory store.

pub mod memory;
pub mod seaorm;
