//! Models passed between services and their callers.

pub mod administrator;
pub mod db;
pub mod vehicle;
