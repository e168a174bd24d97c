use serde::Serialize;

/// Fixed number of records returned per page.
pub const PAGE_SIZE: u64 = 25;

/// Slice of the ordered result set that a page covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u64,
    pub offset: u64,
}

impl PageWindow {
    /// Window for a one-based page. Page 0 is treated as page 1 and offsets
    /// that would overflow saturate, which lands past any real result set.
    pub fn for_page(page: u64) -> Self {
        let page = if page == 0 { 1 } else { page };
        Self {
            limit: PAGE_SIZE,
            offset: (page - 1).saturating_mul(PAGE_SIZE),
        }
    }

    /// Number of records a store holding `total` matches returns for this
    /// window.
    pub fn expected_len(&self, total: u64) -> u64 {
        total.saturating_sub(self.offset).min(self.limit)
    }
}

/// Paging metadata returned next to a page of results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationEnvelope {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_more: bool,
}

impl PaginationEnvelope {
    pub fn assemble(total: u64, window: PageWindow, page: u64) -> Self {
        let total_pages = total.div_ceil(window.limit);
        Self {
            page,
            limit: window.limit,
            total,
            total_pages,
            has_more: page < total_pages,
        }
    }
}
