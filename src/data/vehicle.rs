use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::LikeExpr,
};

use crate::data::{page_limit, page_offset};

/// Escape character for `LIKE` patterns built from filter text.
const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching `text` anywhere, with `%` and `_` in `text` taken literally.
fn contains_pattern(text: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a vehicle, returning it with its assigned ID
    pub async fn create(
        &self,
        name: String,
        brand: String,
        year: i32,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(name),
            brand: ActiveValue::Set(brand),
            year: ActiveValue::Set(year),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }

    /// Returns vehicles ordered by ID, skipping `page * page_size` rows
    ///
    /// `page` is zero-based; a page too far out to address is returned empty.
    /// `name` and `brand` restrict results to rows whose column contains the given
    /// text. `%` and `_` match themselves; case handling follows the backend's
    /// collation.
    pub async fn get_page(
        &self,
        page: u64,
        page_size: u64,
        name: Option<&str>,
        brand: Option<&str>,
    ) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        let Some(offset) = page_offset(page, page_size) else {
            return Ok(Vec::new());
        };

        let mut query = entity::prelude::Vehicle::find();

        if let Some(name) = name {
            query = query.filter(entity::vehicle::Column::Name.like(contains_pattern(name)));
        }
        if let Some(brand) = brand {
            query = query.filter(entity::vehicle::Column::Brand.like(contains_pattern(brand)));
        }

        query
            .order_by_asc(entity::vehicle::Column::Id)
            .offset(offset)
            .limit(page_limit(page_size))
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Vehicle::find().count(self.db).await
    }

    /// Replaces every field of an existing vehicle
    ///
    /// Returns `Ok(None)` if no vehicle has the given ID.
    pub async fn update(
        &self,
        id: i32,
        name: String,
        brand: String,
        year: i32,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        let vehicle = match entity::prelude::Vehicle::find_by_id(id).one(self.db).await? {
            Some(vehicle) => vehicle,
            None => return Ok(None),
        };

        let mut vehicle_am = vehicle.into_active_model();
        vehicle_am.name = ActiveValue::Set(name);
        vehicle_am.brand = ActiveValue::Set(brand);
        vehicle_am.year = ActiveValue::Set(year);

        let vehicle = vehicle_am.update(self.db).await?;

        Ok(Some(vehicle))
    }

    /// Deletes a vehicle
    ///
    /// Returns OK regardless of the vehicle existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
