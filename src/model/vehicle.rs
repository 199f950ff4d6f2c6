/// Fields required to create or replace a vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewVehicle {
    pub name: String,
    pub brand: String,
    pub year: i32,
}

/// Optional substring filters applied when listing vehicles.
///
/// `%` and `_` are matched literally, not as `LIKE` wildcards.
#[derive(Clone, Debug, Default)]
pub struct VehicleFilter {
    pub name: Option<String>,
    pub brand: Option<String>,
}
