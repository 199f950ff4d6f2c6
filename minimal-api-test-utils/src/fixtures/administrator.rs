use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_PASSWORD_PLACEHOLDER, error::TestError, model::AdministratorModel, TestContext,
};

impl TestContext {
    pub fn administrator<'a>(&'a self) -> AdministratorFixtures<'a> {
        AdministratorFixtures { setup: self }
    }
}

pub struct AdministratorFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AdministratorFixtures<'a> {
    /// Insert an administrator with a placeholder password and an auto-assigned ID.
    pub async fn insert_mock_administrator(
        &self,
        email: &str,
        role: &str,
    ) -> Result<AdministratorModel, TestError> {
        Ok(
            entity::prelude::Administrator::insert(entity::administrator::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set(TEST_PASSWORD_PLACEHOLDER.to_string()),
                role: ActiveValue::Set(role.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
