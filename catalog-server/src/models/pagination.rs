//! Pagination types

use serde::Deserialize;

/// Default items per page
pub const DEFAULT_LIMIT: u32 = 5;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (at least 1)
    pub limit: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// Page and limit are raised to a minimum of 1. There is no upper
    /// bound on limit: a client asking for more than exists gets one page.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Number of records to skip: (page - 1) * limit.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// One page of results plus the total matching count
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: u64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl<T> Paginated<T> {
    /// Total number of pages, `ceil(total / limit)`.
    ///
    /// Zero when nothing matched.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.limit.max(1)))
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            params.page.unwrap_or(1),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(total: u64, limit: u32) -> Paginated<()> {
        Paginated {
            items: vec![],
            total,
            page: 1,
            limit,
        }
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1, 5).offset(), 0);
        assert_eq!(Pagination::new(2, 5).offset(), 5);
        assert_eq!(Pagination::new(3, 25).offset(), 50);
    }

    #[test]
    fn defaults() {
        let p = Pagination::from(PaginationParams::default());
        assert_eq!(p, Pagination { page: 1, limit: 5 });
        assert_eq!(p, Pagination::default());
    }

    #[test]
    fn clamps_page() {
        assert_eq!(Pagination::new(0, 10).page, 1);
    }

    #[test]
    fn limit_has_floor_but_no_ceiling() {
        assert_eq!(Pagination::new(1, 0).limit, 1);
        assert_eq!(Pagination::new(1, 999).limit, 999);
        assert_eq!(Pagination::new(2, 120).offset(), 120);
    }

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(page_of(0, 5).total_pages(), 0);
        assert_eq!(page_of(1, 5).total_pages(), 1);
        assert_eq!(page_of(5, 5).total_pages(), 1);
        assert_eq!(page_of(6, 5).total_pages(), 2);
        assert_eq!(page_of(25, 10).total_pages(), 3);
        assert_eq!(page_of(100, 10).total_pages(), 10);
        assert_eq!(page_of(150, 200).total_pages(), 1);
        assert_eq!(page_of(150, 120).total_pages(), 2);
    }

    #[test]
    fn large_page_offset_does_not_overflow() {
        let p = Pagination::new(u32::MAX, u32::MAX);
        assert_eq!(p.offset(), u64::from(u32::MAX - 1) * u64::from(u32::MAX));
    }
}
