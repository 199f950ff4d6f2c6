//! Vehicle and administrator data service backed by SeaORM.
//!
//! [`context::DbContext`] resolves the storage backend (a MySQL-compatible server
//! or an in-memory SQLite substitute) from configuration, the `migration` crate
//! brings the schema up to date, [`seed`] guarantees the fixed seed rows and the
//! [`service`] layer performs CRUD through repositories in [`data`].

pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod model;
pub mod seed;
pub mod service;
pub mod startup;
pub mod util;
