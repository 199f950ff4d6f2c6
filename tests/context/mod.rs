//! Tests for DbContext schema creation and seeding.

mod ensure_created;

use minimal_api_test_utils::prelude::*;
