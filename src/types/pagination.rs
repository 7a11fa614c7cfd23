//! Pagination types for the follower/followed listings.

use serde::Deserialize;

use crate::config::{DEFAULT_PAGE_NUMBER, FOLLOW_PAGE_SIZE};

/// Page query parameter. The page size is fixed at [`FOLLOW_PAGE_SIZE`];
/// clients only choose the (1-indexed) page number.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

impl PageQuery {
    /// Offset into the result set for this page. The page number comes
    /// straight from the query string, so the arithmetic saturates
    /// instead of overflowing on absurd values.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(FOLLOW_PAGE_SIZE)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_first_page() {
        assert_eq!(PageQuery { page: 1 }.offset(), 0);
    }

    #[test]
    fn test_offset_later_page() {
        assert_eq!(PageQuery { page: 3 }.offset(), 2 * FOLLOW_PAGE_SIZE);
    }

    #[test]
    fn test_offset_page_zero_clamps() {
        assert_eq!(PageQuery { page: 0 }.offset(), 0);
    }

    #[test]
    fn test_offset_max_page_saturates() {
        assert_eq!(PageQuery { page: u64::MAX }.offset(), u64::MAX);
    }
}
