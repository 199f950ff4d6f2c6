use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::data::{page_limit, page_offset};

pub struct AdministratorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdministratorRepository<'a, C> {
    /// Creates a new instance of [`AdministratorRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an administrator, returning it with its assigned ID
    ///
    /// `password_hash` is stored as given; hashing is the caller's job.
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        role: String,
    ) -> Result<entity::administrator::Model, DbErr> {
        let administrator = entity::administrator::ActiveModel {
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role),
            ..Default::default()
        };

        administrator.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::administrator::Model>, DbErr> {
        entity::prelude::Administrator::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::administrator::Model>, DbErr> {
        entity::prelude::Administrator::find()
            .filter(entity::administrator::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Returns administrators ordered by ID, skipping `page * page_size` rows
    ///
    /// `page` is zero-based. A page too far out to address is returned empty
    /// without querying.
    pub async fn get_page(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<entity::administrator::Model>, DbErr> {
        let Some(offset) = page_offset(page, page_size) else {
            return Ok(Vec::new());
        };

        entity::prelude::Administrator::find()
            .order_by_asc(entity::administrator::Column::Id)
            .offset(offset)
            .limit(page_limit(page_size))
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Administrator::find().count(self.db).await
    }

    /// Deletes an administrator
    ///
    /// Returns OK regardless of the administrator existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Administrator::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Deletes every administrator
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Administrator::delete_many()
            .exec(self.db)
            .await
    }
}
