use minimal_api::{
    config::Config,
    context::DbContext,
    model::vehicle::{NewVehicle, VehicleFilter},
    seed::{SeedReport, ADMINISTRATORS, VEHICLES},
    service::{administrator::AdministratorService, vehicle::VehicleService},
};
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

use super::*;

/// Tests that a freshly created schema holds exactly the seed rows.
///
/// Expected: one administrator with a hashed password and the three seed vehicles
#[tokio::test]
async fn creates_schema_with_seed_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let context: DbContext = test.to_db_context();

    let report = context.ensure_created().await.unwrap();

    assert_eq!(
        report,
        SeedReport {
            administrators: ADMINISTRATORS.len(),
            vehicles: VEHICLES.len(),
        }
    );

    let administrators = entity::prelude::Administrator::find().all(&test.db).await?;
    assert_eq!(administrators.len(), 1);
    assert_eq!(administrators[0].id, 1);
    assert_eq!(administrators[0].email, "administrador@teste.com");
    assert_eq!(administrators[0].role, "Adm");
    assert_ne!(administrators[0].password, "123456");

    let vehicles = entity::prelude::Vehicle::find()
        .order_by_asc(entity::vehicle::Column::Id)
        .all(&test.db)
        .await?;
    assert_eq!(vehicles, factory::seed_vehicle_models());

    Ok(())
}

/// Tests that running ensure_created twice neither fails nor duplicates rows.
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let context: DbContext = test.to_db_context();

    context.ensure_created().await.unwrap();
    let second = context.ensure_created().await.unwrap();

    assert_eq!(second, SeedReport::default());
    assert_eq!(
        entity::prelude::Administrator::find().count(&test.db).await?,
        1
    );
    assert_eq!(entity::prelude::Vehicle::find().count(&test.db).await?, 3);

    Ok(())
}

/// Tests that existing rows survive and only missing seed rows are added.
#[tokio::test]
async fn keeps_existing_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    test.vehicle()
        .insert_vehicle_with_id(2, "Gol Quadrado", "Volkswagen", 1990)
        .await?;
    let context: DbContext = test.to_db_context();

    let report = context.ensure_created().await.unwrap();

    assert_eq!(report.vehicles, 2);
    let kept = entity::prelude::Vehicle::find_by_id(2)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(kept.name, "Gol Quadrado");

    Ok(())
}

/// Tests that the in-memory sentinel works without any database server.
///
/// Rows written through the context are visible to later reads on it.
#[tokio::test]
async fn in_memory_sentinel_needs_no_server() -> Result<(), TestError> {
    let context = DbContext::new(Config::with_connection_string("inMemory"));
    assert!(!context.is_configured());

    context.ensure_created().await.unwrap();
    assert!(context.is_configured());

    let db = context.connection().await.unwrap();
    let vehicle_service = VehicleService::new(db);
    let created = vehicle_service
        .create(NewVehicle {
            name: "Chevette".to_string(),
            brand: "Chevrolet".to_string(),
            year: 1978,
        })
        .await
        .unwrap();

    let db = context.connection().await.unwrap();
    let vehicles = VehicleService::new(db)
        .list(None, &VehicleFilter::default())
        .await
        .unwrap();
    assert_eq!(vehicles.len(), 4);
    assert!(vehicles.contains(&created));

    let administrator = AdministratorService::new(db)
        .login("administrador@teste.com", "123456")
        .await
        .unwrap();
    assert!(administrator.is_some());

    Ok(())
}

/// Tests that separate in-memory contexts do not share rows.
#[tokio::test]
async fn in_memory_contexts_are_isolated() -> Result<(), TestError> {
    let first = DbContext::new(Config::in_memory());
    let second = DbContext::new(Config::in_memory());

    first.ensure_created().await.unwrap();
    let db = first.connection().await.unwrap();
    AdministratorService::new(db).delete_all().await.unwrap();

    second.ensure_created().await.unwrap();
    let db = second.connection().await.unwrap();
    let administrators = AdministratorService::new(db).list(None).await.unwrap();

    assert_eq!(administrators.len(), 1);

    Ok(())
}

/// Tests that a missing connection string fails on first use instead of panicking.
#[tokio::test]
async fn fails_without_connection_string() -> Result<(), TestError> {
    let context = DbContext::new(Config::default());

    let result = context.ensure_created().await;

    assert!(result.is_err());
    assert!(!context.is_configured());

    Ok(())
}
