pub use super::administrator::Entity as Administrator;
pub use super::seed_version::Entity as SeedVersion;
pub use super::vehicle::Entity as Vehicle;
