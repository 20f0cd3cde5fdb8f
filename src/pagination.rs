use serde::Serialize;
use utoipa::ToSchema;

/// Page size used when the caller omits a limit or sends a non-positive one.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One page of results together with the paging metadata the API exposes.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub current_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

impl<T> PagedResponse<T> {
    /// Wraps a page of items. `page_size` must be positive; callers
    /// normalize it before counting pages.
    pub fn new(items: Vec<T>, current_page: usize, total_items: usize, page_size: usize) -> Self {
        Self {
            current_page,
            total_items,
            total_pages: total_items.div_ceil(page_size),
            items,
        }
    }
}
