use serde::{Deserialize, Serialize};

/// Sentinel for "no status filter" in the UI status selector.
pub const ALL_STATUSES: &str = "all";

/// Wire form of the list filter state:
/// `GET /api/{resource}?search=&status=&page=&per_page=`.
///
/// Pages are 1-based. Serialized with `serde_qs` on the frontend; fields set
/// to their empty value are omitted from the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub page: usize,
    pub per_page: usize,
}

impl ListQuery {
    /// page >= 1 and per_page > 0; anything else is a programming error on
    /// the calling page, reported before dispatch.
    pub fn is_valid(&self) -> bool {
        self.page >= 1 && self.per_page > 0
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            page: 1,
            per_page: 25,
        }
    }
}

/// Paginated list envelope returned by `GET /api/{resource}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub last_page: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_valid() {
        let q = ListQuery::default();
        assert!(q.is_valid());
        assert_eq!(q.page, 1);
        assert_eq!(q.per_page, 25);
    }

    #[test]
    fn test_page_zero_is_invalid() {
        let q = ListQuery {
            page: 0,
            ..Default::default()
        };
        assert!(!q.is_valid());
    }

    #[test]
    fn test_empty_fields_are_omitted_from_json() {
        let q = ListQuery::default();
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("search").is_none());
        assert!(json.get("status").is_none());
    }
}
