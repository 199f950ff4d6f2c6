use sea_orm::DatabaseConnection;

use crate::{
    data::administrator::AdministratorRepository,
    error::Error,
    model::{administrator::NewAdministrator, db::AdministratorModel},
    service::{page_index, PAGE_SIZE},
    util::password,
};

/// Service for managing administrator accounts.
pub struct AdministratorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdministratorService<'a> {
    /// Creates a new instance of [`AdministratorService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new administrator and returns it with its assigned ID.
    ///
    /// The password is hashed before it reaches the database. The row is written
    /// immediately and is visible to later calls on the same connection.
    ///
    /// # Returns
    /// - `Ok(AdministratorModel)` - The stored administrator
    /// - `Err(Error::PasswordHash)` - Hashing the password failed
    /// - `Err(Error::DbErr)` - Insert failed
    pub async fn create(
        &self,
        administrator: NewAdministrator,
    ) -> Result<AdministratorModel, Error> {
        let administrator_repo = AdministratorRepository::new(self.db);

        let password_hash = password::hash(&administrator.password)?;
        let created = administrator_repo
            .create(administrator.email, password_hash, administrator.role)
            .await?;

        tracing::debug!("Created administrator ID {}", created.id);

        Ok(created)
    }

    /// Returns one page of administrators ordered by ID.
    ///
    /// Pages are 1-based and hold at most [`PAGE_SIZE`] rows; `None` means the first page.
    pub async fn list(&self, page: Option<u64>) -> Result<Vec<AdministratorModel>, Error> {
        let administrator_repo = AdministratorRepository::new(self.db);

        Ok(administrator_repo
            .get_page(page_index(page), PAGE_SIZE)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AdministratorModel>, Error> {
        let administrator_repo = AdministratorRepository::new(self.db);

        Ok(administrator_repo.get_by_id(id).await?)
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(Some(AdministratorModel))` - Credentials match
    /// - `Ok(None)` - Unknown email or wrong password
    /// - `Err(Error::DbErr)` - Lookup failed
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<AdministratorModel>, Error> {
        let administrator_repo = AdministratorRepository::new(self.db);

        let Some(administrator) = administrator_repo.get_by_email(email).await? else {
            tracing::warn!("Login attempt for unknown administrator email");
            return Ok(None);
        };

        if !password::verify(password, &administrator.password) {
            tracing::warn!(
                "Login attempt with wrong password for administrator ID {}",
                administrator.id
            );
            return Ok(None);
        }

        Ok(Some(administrator))
    }

    /// Deletes an administrator, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let administrator_repo = AdministratorRepository::new(self.db);

        let result = administrator_repo.delete(id).await?;
        if result.rows_affected > 0 {
            tracing::debug!("Deleted administrator ID {}", id);
        }

        Ok(result.rows_affected > 0)
    }

    /// Deletes every administrator, returning how many rows were removed.
    pub async fn delete_all(&self) -> Result<u64, Error> {
        let administrator_repo = AdministratorRepository::new(self.db);

        let result = administrator_repo.delete_all().await?;
        tracing::debug!("Deleted {} administrator(s)", result.rows_affected);

        Ok(result.rows_affected)
    }
}
