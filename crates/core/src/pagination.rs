//! Page-number pagination math shared by listing endpoints.

/// Page size used when the client does not send `page_size`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a user-provided limit into `[1, max]`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// A validated `(page, page_size)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: i64,
    page_size: i64,
}

impl PageWindow {
    /// Build a window from raw query values.
    ///
    /// `page_size` is clamped to `[1, MAX_PAGE_SIZE]` (default
    /// [`DEFAULT_PAGE_SIZE`]); `page` is floored at 1 (default 1).
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: clamp_limit(page_size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Rows to skip: `(page - 1) * page_size`, saturating on overflow.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// True when rows remain after this page.
    pub fn has_next(&self, total: i64) -> bool {
        self.offset().saturating_add(self.page_size) < total
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn next_page(&self, total: i64) -> Option<i64> {
        self.has_next(total).then(|| self.page + 1)
    }

    pub fn previous_page(&self) -> Option<i64> {
        self.has_previous().then(|| self.page - 1)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(None, None)
    }
}
