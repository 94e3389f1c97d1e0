//! Offset/limit pagination for the product listing.
//!
//! Raw `page` and `limit` query values are parsed leniently: anything that is
//! not a valid unsigned 32-bit integer behaves as if the parameter were absent.

/// Page returned when `page` is absent or unparsable.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when `limit` is absent or unparsable.
pub const DEFAULT_LIMIT: u32 = 5;

/// A resolved page request. Both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Resolve raw query-string values into a page request.
    ///
    /// Zero is floored to 1 for both values so the offset is never negative
    /// and `max_page` never divides by zero.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_or(page, DEFAULT_PAGE).max(1);
        let limit = parse_or(limit, DEFAULT_LIMIT).max(1);
        Self {
            page: i64::from(page),
            limit: i64::from(limit),
        }
    }

    /// Number of rows skipped before this page: `(page - 1) * limit`,
    /// saturating at `i64::MAX`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Number of pages needed to hold `total` rows at this page size.
    pub fn max_page(&self, total: i64) -> i64 {
        max_page(total, self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: i64::from(DEFAULT_PAGE),
            limit: i64::from(DEFAULT_LIMIT),
        }
    }
}

/// Ceiling of `total / limit`. `limit` must be positive.
pub fn max_page(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

fn parse_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_use_defaults() {
        let req = PageRequest::from_query(None, None);
        assert_eq!(req, PageRequest::default());
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 5);
    }

    #[test]
    fn valid_values_are_used() {
        let req = PageRequest::from_query(Some("3"), Some("10"));
        assert_eq!(req.page, 3);
        assert_eq!(req.limit, 10);
        assert_eq!(req.offset(), 20);
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let req = PageRequest::from_query(Some("abc"), Some("-4"));
        assert_eq!(req, PageRequest::default());

        let req = PageRequest::from_query(Some(""), Some("1.5"));
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn values_beyond_u32_fall_back_to_defaults() {
        let req = PageRequest::from_query(Some("4294967296"), Some("99999999999"));
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn zero_limit_is_floored_to_one() {
        let req = PageRequest::from_query(Some("2"), Some("0"));
        assert_eq!(req.limit, 1);
        assert_eq!(req.offset(), 1);
    }

    #[test]
    fn zero_page_is_floored_to_one() {
        let req = PageRequest::from_query(Some("0"), Some("10"));
        assert_eq!(req.page, 1);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn first_page_has_zero_offset() {
        assert_eq!(PageRequest::from_query(Some("1"), Some("100")).offset(), 0);
    }

    #[test]
    fn max_page_rounds_up() {
        assert_eq!(max_page(99, 10), 10);
        assert_eq!(max_page(99, 100), 1);
        assert_eq!(max_page(100, 10), 10);
        assert_eq!(max_page(101, 10), 11);
    }

    #[test]
    fn max_page_of_empty_table_is_zero() {
        assert_eq!(max_page(0, 5), 0);
    }

    #[test]
    fn largest_page_and_limit_saturate_offset() {
        let req = PageRequest::from_query(Some("4294967295"), Some("4294967295"));
        assert_eq!(req.offset(), i64::MAX);
    }
}
