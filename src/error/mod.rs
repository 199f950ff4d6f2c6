//! Error types for the minimal API.
//!
//! Every error propagates to the immediate caller; nothing here is retried or
//! translated. Configuration problems and connectivity problems surface on the
//! first database operation, integrity problems (such as duplicate primary keys)
//! surface as [`sea_orm::DbErr`].

pub mod config;
pub mod context;

use thiserror::Error;

use crate::error::{config::ConfigError, context::ContextError};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid connection string).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Backend resolution error (connectivity, server version detection).
    #[error(transparent)]
    ContextError(#[from] ContextError),
    /// Database error (query failures, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),
}
