//! Shared DTO envelopes for the API layer

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default page size when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Result envelope returned from write operations, carrying the new
/// entity's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommandResponse {
    pub id: i32,
}

/// Paging and sorting parameters supplied by the caller.
///
/// `page` is zero-based. `sort` values are per-endpoint (e.g.
/// `created_at_asc`); unknown values fall back to the default order.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}

/// Page envelope carrying content plus paging metadata
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}
