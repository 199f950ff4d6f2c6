//! Versioned seed dataset.
//!
//! These rows must exist in every freshly created schema. [`apply`] inserts each
//! row whose primary key is absent, so it can run after the migrations (which
//! already insert the vehicle rows) or against a schema created from the entity
//! definitions.
//!
//! The applied [`SEED_VERSION`] is recorded in the `SeedVersion` table. A database
//! already at the current version is left alone, so rows removed after seeding
//! are not brought back until the version is bumped.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, Schema};

use crate::{error::Error, util::password};

/// Bumped whenever the rows below change.
pub static SEED_VERSION: i32 = 1;

/// Primary key of the only `SeedVersion` row.
static SEED_VERSION_ROW: i32 = 1;

pub struct AdministratorSeed {
    pub id: i32,
    pub email: &'static str,
    /// Plaintext, hashed when the row is inserted
    pub password: &'static str,
    pub role: &'static str,
}

pub struct VehicleSeed {
    pub id: i32,
    pub name: &'static str,
    pub brand: &'static str,
    pub year: i32,
}

pub static ADMINISTRATORS: [AdministratorSeed; 1] = [AdministratorSeed {
    id: 1,
    email: "administrador@teste.com",
    password: "123456",
    role: "Adm",
}];

pub static VEHICLES: [VehicleSeed; 3] = [
    VehicleSeed {
        id: 1,
        name: "Fusca",
        brand: "Volkswagen",
        year: 1980,
    },
    VehicleSeed {
        id: 2,
        name: "Gol",
        brand: "Volkswagen",
        year: 2005,
    },
    VehicleSeed {
        id: 3,
        name: "Uno",
        brand: "Fiat",
        year: 1998,
    },
];

/// Number of rows [`apply`] actually inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub administrators: usize,
    pub vehicles: usize,
}

/// Returns the seed version recorded in `db`, if any.
pub async fn recorded_version<C: ConnectionTrait>(db: &C) -> Result<Option<i32>, Error> {
    ensure_version_table(db).await?;

    let row = entity::prelude::SeedVersion::find_by_id(SEED_VERSION_ROW)
        .one(db)
        .await?;

    Ok(row.map(|row| row.version))
}

/// Inserts every seed row that is not present yet, matched by primary key.
///
/// Does nothing when `db` already records [`SEED_VERSION`] or a newer version.
pub async fn apply<C: ConnectionTrait>(db: &C) -> Result<SeedReport, Error> {
    let mut report = SeedReport::default();

    let recorded = recorded_version(db).await?;
    if recorded.is_some_and(|version| version >= SEED_VERSION) {
        tracing::debug!("Seed dataset v{} already applied", SEED_VERSION);
        return Ok(report);
    }

    for seed in &ADMINISTRATORS {
        if entity::prelude::Administrator::find_by_id(seed.id)
            .one(db)
            .await?
            .is_some()
        {
            continue;
        }

        entity::administrator::ActiveModel {
            id: ActiveValue::Set(seed.id),
            email: ActiveValue::Set(seed.email.to_string()),
            password: ActiveValue::Set(password::hash(seed.password)?),
            role: ActiveValue::Set(seed.role.to_string()),
        }
        .insert(db)
        .await?;

        report.administrators += 1;
    }

    for seed in &VEHICLES {
        if entity::prelude::Vehicle::find_by_id(seed.id)
            .one(db)
            .await?
            .is_some()
        {
            continue;
        }

        entity::vehicle::ActiveModel {
            id: ActiveValue::Set(seed.id),
            name: ActiveValue::Set(seed.name.to_string()),
            brand: ActiveValue::Set(seed.brand.to_string()),
            year: ActiveValue::Set(seed.year),
        }
        .insert(db)
        .await?;

        report.vehicles += 1;
    }

    record_version(db, recorded.is_some()).await?;

    tracing::info!(
        "Applied seed dataset v{}: {} administrator(s), {} vehicle(s) inserted",
        SEED_VERSION,
        report.administrators,
        report.vehicles
    );

    Ok(report)
}

async fn ensure_version_table<C: ConnectionTrait>(db: &C) -> Result<(), Error> {
    let schema = Schema::new(db.get_database_backend());
    let mut stmt = schema.create_table_from_entity(entity::prelude::SeedVersion);
    stmt.if_not_exists();

    db.execute(&stmt).await?;

    Ok(())
}

async fn record_version<C: ConnectionTrait>(db: &C, exists: bool) -> Result<(), Error> {
    let row = entity::seed_version::ActiveModel {
        id: ActiveValue::Set(SEED_VERSION_ROW),
        version: ActiveValue::Set(SEED_VERSION),
    };

    if exists {
        row.update(db).await?;
    } else {
        row.insert(db).await?;
    }

    Ok(())
}
