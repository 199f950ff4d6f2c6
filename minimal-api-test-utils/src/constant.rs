//! Constant values shared across tests.

/// Email used for the administrator created by the service tests.
pub static TEST_ADMIN_EMAIL: &str = "teste@teste.com";

/// Plaintext password used for the administrator created by the service tests.
pub static TEST_ADMIN_PASSWORD: &str = "teste";

/// Role label used for the administrator created by the service tests.
pub static TEST_ADMIN_ROLE: &str = "Adm";

/// Placeholder stored in the password column by fixtures.
///
/// Not a valid hash, so logins against fixture administrators always fail.
pub static TEST_PASSWORD_PLACEHOLDER: &str = "not-a-password-hash";
