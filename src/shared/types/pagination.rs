/// Pagination window passed to the store layer.
///
/// The store boundary always speaks raw `offset`/`limit`. API edges that
/// expose a page index instead of a raw offset convert exactly once via
/// [`Pagination::from_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Number of rows to skip.
    pub offset: u64,
    /// Maximum number of rows to return.
    pub limit: u64,
}

impl Pagination {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// The single page-index mapping: `offset = page * limit`.
    pub fn from_page(page: u64, limit: u64) -> Self {
        Self {
            offset: page * limit,
            limit,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_page_multiplies() {
        let p = Pagination::from_page(3, 10);
        assert_eq!(p.offset, 30);
        assert_eq!(p.limit, 10);
    }

    #[test]
    fn raw_offset_is_kept_verbatim() {
        let p = Pagination::new(7, 10);
        assert_eq!(p.offset, 7);
    }

    #[test]
    fn default_is_first_ten() {
        let p = Pagination::default();
        assert_eq!((p.offset, p.limit), (0, 10));
    }
}
