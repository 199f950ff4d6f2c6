//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Type alias for the administrator database model.
///
/// # Fields (from `entity::administrator::Model`)
/// - `id` - Primary key, assigned on insert
/// - `email` - Login email
/// - `password` - Argon2 PHC hash of the password
/// - `role` - Free-text role label
pub type AdministratorModel = entity::administrator::Model;

/// Type alias for the vehicle database model.
///
/// # Fields (from `entity::vehicle::Model`)
/// - `id` - Primary key, assigned on insert
/// - `name` - Model name, e.g. `Fusca`
/// - `brand` - Manufacturer, e.g. `Volkswagen`
/// - `year` - Model year
pub type VehicleModel = entity::vehicle::Model;
