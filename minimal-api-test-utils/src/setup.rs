/// Builds a [`TestContext`](crate::TestContext) with tables for the given entities.
///
/// With no arguments the database is left empty, which is useful for asserting
/// that operations fail when their tables are missing.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::Vehicle)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
