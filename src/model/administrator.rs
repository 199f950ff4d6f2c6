/// Fields required to create an administrator.
#[derive(Clone)]
pub struct NewAdministrator {
    pub email: String,
    /// Plaintext password; only its hash is stored
    pub password: String,
    pub role: String,
}
