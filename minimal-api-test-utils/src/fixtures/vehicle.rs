use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::VehicleModel, TestContext};

impl TestContext {
    pub fn vehicle<'a>(&'a self) -> VehicleFixtures<'a> {
        VehicleFixtures { setup: self }
    }
}

pub struct VehicleFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> VehicleFixtures<'a> {
    /// Insert a vehicle with an auto-assigned ID.
    pub async fn insert_mock_vehicle(
        &self,
        name: &str,
        brand: &str,
        year: i32,
    ) -> Result<VehicleModel, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                brand: ActiveValue::Set(brand.to_string()),
                year: ActiveValue::Set(year),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a vehicle with an explicit ID.
    pub async fn insert_vehicle_with_id(
        &self,
        id: i32,
        name: &str,
        brand: &str,
        year: i32,
    ) -> Result<VehicleModel, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                id: ActiveValue::Set(id),
                name: ActiveValue::Set(name.to_string()),
                brand: ActiveValue::Set(brand.to_string()),
                year: ActiveValue::Set(year),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
