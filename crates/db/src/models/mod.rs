//! Row models and input DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row and the field set accepted for inserts and updates.

pub mod user;
