//! Factory functions for in-memory models.
//!
//! These build model instances without touching the database, for comparing
//! query results against expected rows.

use crate::model::VehicleModel;

/// Create a vehicle model with the given values.
pub fn vehicle_model(id: i32, name: &str, brand: &str, year: i32) -> VehicleModel {
    VehicleModel {
        id,
        name: name.to_string(),
        brand: brand.to_string(),
        year,
    }
}

/// The three vehicle rows every freshly created schema must contain.
pub fn seed_vehicle_models() -> Vec<VehicleModel> {
    vec![
        vehicle_model(1, "Fusca", "Volkswagen", 1980),
        vehicle_model(2, "Gol", "Volkswagen", 2005),
        vehicle_model(3, "Uno", "Fiat", 1998),
    ]
}
