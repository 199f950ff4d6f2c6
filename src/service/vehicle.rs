use sea_orm::DatabaseConnection;

use crate::{
    data::vehicle::VehicleRepository,
    error::Error,
    model::{
        db::VehicleModel,
        vehicle::{NewVehicle, VehicleFilter},
    },
    service::{page_index, PAGE_SIZE},
};

/// Service for managing vehicles.
pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    /// Creates a new instance of [`VehicleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, vehicle: NewVehicle) -> Result<VehicleModel, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let created = vehicle_repo
            .create(vehicle.name, vehicle.brand, vehicle.year)
            .await?;

        tracing::debug!("Created vehicle ID {}", created.id);

        Ok(created)
    }

    /// Returns one page of vehicles ordered by ID, optionally filtered by name and brand.
    ///
    /// Pages are 1-based and hold at most [`PAGE_SIZE`] rows; `None` means the first page.
    pub async fn list(
        &self,
        page: Option<u64>,
        filter: &VehicleFilter,
    ) -> Result<Vec<VehicleModel>, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        Ok(vehicle_repo
            .get_page(
                page_index(page),
                PAGE_SIZE,
                filter.name.as_deref(),
                filter.brand.as_deref(),
            )
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<VehicleModel>, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        Ok(vehicle_repo.get_by_id(id).await?)
    }

    /// Replaces the fields of an existing vehicle.
    ///
    /// Returns `Ok(None)` if no vehicle has the given ID.
    pub async fn update(
        &self,
        id: i32,
        vehicle: NewVehicle,
    ) -> Result<Option<VehicleModel>, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let updated = vehicle_repo
            .update(id, vehicle.name, vehicle.brand, vehicle.year)
            .await?;

        if updated.is_some() {
            tracing::debug!("Updated vehicle ID {}", id);
        }

        Ok(updated)
    }

    /// Deletes a vehicle, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let result = vehicle_repo.delete(id).await?;
        if result.rows_affected > 0 {
            tracing::debug!("Deleted vehicle ID {}", id);
        }

        Ok(result.rows_affected > 0)
    }
}
