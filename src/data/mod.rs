//! Data access layer repositories.
//!
//! Repositories are thin wrappers over SeaORM queries for a single table. They
//! return [`sea_orm::DbErr`] untouched; hashing, pagination defaults and logging
//! belong to the service layer.

pub mod administrator;
pub mod vehicle;

/// Largest offset or limit the SQL drivers accept; they bind both as `i64`.
const MAX_ROWS: u64 = i64::MAX as u64;

/// Row offset of zero-based `page`, or `None` when no row can live that far out.
pub(crate) fn page_offset(page: u64, page_size: u64) -> Option<u64> {
    page.checked_mul(page_size)
        .filter(|offset| *offset <= MAX_ROWS)
}

/// Clamps a page size to what the drivers can bind.
pub(crate) fn page_limit(page_size: u64) -> u64 {
    page_size.min(MAX_ROWS)
}
