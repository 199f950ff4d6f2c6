//! Tests for VehicleService.

use minimal_api::{
    model::vehicle::{NewVehicle, VehicleFilter},
    service::vehicle::VehicleService,
};

use super::*;

fn new_vehicle(name: &str, brand: &str, year: i32) -> NewVehicle {
    NewVehicle {
        name: name.to_string(),
        brand: brand.to_string(),
        year,
    }
}

#[tokio::test]
async fn creates_and_finds_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let vehicle_service = VehicleService::new(&test.db);

    let created = vehicle_service
        .create(new_vehicle("Corcel", "Ford", 1973))
        .await
        .unwrap();
    let found = vehicle_service.get_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));

    Ok(())
}

#[tokio::test]
async fn lists_vehicles_with_filters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_vehicle("Fusca", "Volkswagen", 1980)
        .with_mock_vehicle("Gol", "Volkswagen", 2005)
        .with_mock_vehicle("Uno", "Fiat", 1998)
        .build()
        .await?;
    let vehicle_service = VehicleService::new(&test.db);

    let all = vehicle_service
        .list(None, &VehicleFilter::default())
        .await
        .unwrap();
    let fiat = vehicle_service
        .list(
            Some(1),
            &VehicleFilter {
                name: None,
                brand: Some("Fiat".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(fiat.len(), 1);
    assert_eq!(fiat[0].name, "Uno");

    Ok(())
}

/// Tests that a page past the end is empty rather than an error.
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_vehicle("Fusca", "Volkswagen", 1980)
        .build()
        .await?;
    let vehicle_service = VehicleService::new(&test.db);

    let result = vehicle_service
        .list(Some(2), &VehicleFilter::default())
        .await
        .unwrap();

    assert!(result.is_empty());

    Ok(())
}

/// Tests page numbers whose offset no driver can bind.
#[tokio::test]
async fn returns_empty_page_for_huge_page_number() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_vehicle("Fusca", "Volkswagen", 1980)
        .build()
        .await?;
    let vehicle_service = VehicleService::new(&test.db);

    for page in [u64::MAX / 10, u64::MAX] {
        let result = vehicle_service
            .list(Some(page), &VehicleFilter::default())
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    Ok(())
}

/// Tests that a `%` name filter does not act as a wildcard.
#[tokio::test]
async fn matches_percent_literally() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_vehicle("Fusca", "Volkswagen", 1980)
        .with_mock_vehicle("Gol", "Volkswagen", 2005)
        .build()
        .await?;
    let vehicle_service = VehicleService::new(&test.db);

    let result = vehicle_service
        .list(
            None,
            &VehicleFilter {
                name: Some("%".to_string()),
                brand: None,
            },
        )
        .await
        .unwrap();

    assert!(result.is_empty());

    Ok(())
}

#[tokio::test]
async fn updates_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let vehicle = test
        .vehicle()
        .insert_mock_vehicle("Gol", "Volkswagen", 2005)
        .await?;
    let vehicle_service = VehicleService::new(&test.db);

    let result = vehicle_service
        .update(vehicle.id, new_vehicle("Gol G5", "Volkswagen", 2009))
        .await
        .unwrap();

    assert!(result.is_some());
    let stored = vehicle_service.get_by_id(vehicle.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Gol G5");
    assert_eq!(stored.year, 2009);

    Ok(())
}

#[tokio::test]
async fn update_returns_none_for_nonexistent_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let vehicle_service = VehicleService::new(&test.db);

    let result = vehicle_service
        .update(99, new_vehicle("Opala", "Chevrolet", 1975))
        .await
        .unwrap();

    assert!(result.is_none());

    Ok(())
}

#[tokio::test]
async fn deletes_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let vehicle = test
        .vehicle()
        .insert_mock_vehicle("Uno", "Fiat", 1998)
        .await?;
    let vehicle_service = VehicleService::new(&test.db);

    assert!(vehicle_service.delete(vehicle.id).await.unwrap());
    assert!(!vehicle_service.delete(vehicle.id).await.unwrap());

    Ok(())
}
