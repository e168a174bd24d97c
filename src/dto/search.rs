use serde::{Deserialize, Serialize};

use crate::domain::entity::EntityRecord;
use crate::pagination::PaginationEnvelope;

/// Raw query parameters accepted by `/api/search`.
///
/// Both fields stay strings so malformed page numbers reach the normalizer
/// instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text entity name fragment.
    pub q: Option<String>,
    /// One-based page number.
    pub page: Option<String>,
}

/// One page of matching entities plus paging metadata.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<EntityRecord>,
    pub pagination: PaginationEnvelope,
}
