use migration::{Migrator, MigratorTrait};
use tracing_subscriber::EnvFilter;

use crate::{
    context::DbContext,
    error::Error,
    seed::{self, SeedReport},
};

/// Install the global `tracing` subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Resolve the context's backend, run pending migrations and apply the seed dataset
pub async fn initialize_database(context: &DbContext) -> Result<SeedReport, Error> {
    let db = context.connection().await?;

    Migrator::up(db, None).await?;

    seed::apply(db).await
}
