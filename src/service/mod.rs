//! Service layer.
//!
//! Services sit between callers and the repositories: they hash credentials,
//! translate 1-based page numbers and log what they change. Every service
//! borrows the connection handed out by [`crate::context::DbContext`].

pub mod administrator;
pub mod vehicle;

/// Maximum number of rows returned per page by the listing operations.
pub static PAGE_SIZE: u64 = 10;

/// Converts a 1-based page number into a zero-based page index.
///
/// `None` and `Some(0)` both mean the first page.
pub(crate) fn page_index(page: Option<u64>) -> u64 {
    page.unwrap_or(1).saturating_sub(1)
}
