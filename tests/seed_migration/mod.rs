//! Tests for the SeedVeiculos migration.
//!
//! The migrator is driven directly against an empty in-memory database, so the
//! table creation migrations run first and `SeedVeiculos` is always the last
//! applied migration.

use ::migration::{Migrator, MigratorTrait};
use minimal_api_test_utils::{model::VehicleModel, prelude::*};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

/// Migrations that only create tables.
const SCHEMA_MIGRATIONS: u32 = 2;

async fn all_vehicles(db: &DatabaseConnection) -> Result<Vec<VehicleModel>, TestError> {
    Ok(entity::prelude::Vehicle::find()
        .order_by_asc(entity::vehicle::Column::Id)
        .all(db)
        .await?)
}

/// Tests applying every migration to an empty database.
///
/// Expected: exactly the three seed vehicles
#[tokio::test]
async fn up_inserts_seed_vehicles() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    Migrator::up(&test.db, None).await?;

    assert_eq!(all_vehicles(&test.db).await?, factory::seed_vehicle_models());

    Ok(())
}

/// Tests reverting the seed migration right after applying it.
///
/// Expected: the table still exists and is empty again
#[tokio::test]
async fn down_removes_seed_vehicles() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    Migrator::up(&test.db, None).await?;
    Migrator::down(&test.db, Some(1)).await?;

    assert_eq!(entity::prelude::Vehicle::find().count(&test.db).await?, 0);

    Ok(())
}

/// Tests that apply then revert leaves unrelated rows untouched.
#[tokio::test]
async fn down_restores_previous_state() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    Migrator::up(&test.db, Some(SCHEMA_MIGRATIONS)).await?;
    test.vehicle()
        .insert_vehicle_with_id(10, "Opala", "Chevrolet", 1975)
        .await?;
    let before = all_vehicles(&test.db).await?;

    Migrator::up(&test.db, None).await?;
    assert_eq!(all_vehicles(&test.db).await?.len(), 4);
    Migrator::down(&test.db, Some(1)).await?;

    assert_eq!(all_vehicles(&test.db).await?, before);

    Ok(())
}

/// Tests that rows added after the seed survive a revert.
#[tokio::test]
async fn down_only_deletes_seeded_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    Migrator::up(&test.db, None).await?;

    let added = test
        .vehicle()
        .insert_mock_vehicle("Brasilia", "Volkswagen", 1976)
        .await?;
    Migrator::down(&test.db, Some(1)).await?;

    assert_eq!(all_vehicles(&test.db).await?, vec![added]);

    Ok(())
}

/// Tests re-applying the seed migration after a revert.
#[tokio::test]
async fn reapplies_after_down() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    Migrator::up(&test.db, None).await?;
    Migrator::down(&test.db, Some(1)).await?;
    Migrator::up(&test.db, None).await?;

    assert_eq!(all_vehicles(&test.db).await?, factory::seed_vehicle_models());

    Ok(())
}

/// Tests applying the seed migration when one of its IDs is already taken.
///
/// Expected: Err from the primary key collision
#[tokio::test]
async fn up_fails_on_existing_id() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    Migrator::up(&test.db, Some(SCHEMA_MIGRATIONS)).await?;
    test.vehicle()
        .insert_vehicle_with_id(1, "Fusca", "Volkswagen", 1980)
        .await?;

    let result = Migrator::up(&test.db, None).await;

    assert!(result.is_err());

    Ok(())
}
