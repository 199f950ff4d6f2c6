pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD, TEST_ADMIN_ROLE},
        fixtures::factory,
        test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}
