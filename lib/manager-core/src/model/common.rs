#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetListResponse<T> {
    pub values: Vec<T>,
    pub total_items: u64,
}

/// One-based page window applied after all filters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListPagination {
    pub page: u32,
    pub limit: u32,
}

impl ListPagination {
    /// Returns the items of the requested page. Pages past the end are empty,
    /// a page number of zero is treated as the first page.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let limit = self.limit as usize;
        let start = (self.page.max(1) as usize - 1).saturating_mul(limit);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(limit).min(items.len());
        &items[start..end]
    }
}
