//! Test fixture modules.
//!
//! - `administrator` - Inserts `Administradores` rows
//! - `vehicle` - Inserts `Veiculos` rows
//! - `factory` - In-memory model instances, no database involved

pub mod administrator;
pub mod factory;
pub mod vehicle;
