//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the admin write path, with their validation
//! - The entity's translatable field table, where it has one

pub mod contact;
pub mod page;
pub mod project;
pub mod service;
pub mod ui_block;
