//! Query parameter types for API handlers.

use catalog_core::pagination::PageRequest;

/// Raw pagination parameters (`?page=&limit=`).
///
/// Kept as strings so an unparsable value falls back to its default instead
/// of rejecting the request. See [`PageRequest::from_query`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    /// Collect `page` and `limit` from decoded query pairs.
    ///
    /// A repeated key keeps its first value; other keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    pub fn resolve(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.limit.as_deref())
    }
}
