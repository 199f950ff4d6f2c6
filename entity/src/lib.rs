//! SeaORM entities for the `Administradores` and `Veiculos` tables, plus the
//! `SeedVersion` bookkeeping table.

pub mod prelude;

pub mod administrator;
pub mod seed_version;
pub mod vehicle;
