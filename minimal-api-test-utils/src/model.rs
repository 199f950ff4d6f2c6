//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main crate to keep test signatures short.

/// Type alias for the administrator database model.
pub type AdministratorModel = entity::administrator::Model;

/// Type alias for the vehicle database model.
pub type VehicleModel = entity::vehicle::Model;
