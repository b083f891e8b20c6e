use contracts::domain::common::ListQuery;
use std::collections::BTreeMap;

/// What a cache entry under a resource holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    List,
    Stats,
    Detail,
}

impl Scope {
    fn as_str(&self) -> &'static str {
        match self {
            Scope::List => "list",
            Scope::Stats => "stats",
            Scope::Detail => "detail",
        }
    }
}

/// Cache key: resource name + scope + canonical filter parameters.
///
/// Parameters live in a `BTreeMap`, so two filter states with the same values
/// always produce the same key no matter how they were assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    resource: String,
    scope: Scope,
    params: BTreeMap<String, String>,
}

impl QueryKey {
    /// Key for a paginated list under the given filter state.
    pub fn list(resource: &str, query: &ListQuery) -> Self {
        let mut params = BTreeMap::new();
        params.insert("page".to_string(), query.page.to_string());
        params.insert("per_page".to_string(), query.per_page.to_string());
        if !query.search.is_empty() {
            params.insert("search".to_string(), query.search.clone());
        }
        if let Some(status) = &query.status {
            params.insert("status".to_string(), status.clone());
        }
        Self {
            resource: resource.to_string(),
            scope: Scope::List,
            params,
        }
    }

    /// Key for the resource's aggregate stats.
    pub fn stats(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            scope: Scope::Stats,
            params: BTreeMap::new(),
        }
    }

    /// Key for a single record.
    pub fn detail(resource: &str, id: &str) -> Self {
        let mut params = BTreeMap::new();
        params.insert("id".to_string(), id.to_string());
        Self {
            resource: resource.to_string(),
            scope: Scope::Detail,
            params,
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Canonical rendering, e.g. `expense/list?page=1&per_page=25&search=luz`.
    /// Deterministic: parameters come out in BTreeMap order.
    pub fn render(&self) -> String {
        let mut out = format!("{}/{}", self.resource, self.scope.as_str());
        if !self.params.is_empty() {
            out.push('?');
            let mut first = true;
            for (name, value) in &self.params {
                if !first {
                    out.push('&');
                }
                out.push_str(name);
                out.push('=');
                out.push_str(value);
                first = false;
            }
        }
        out
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(search: &str, status: Option<&str>, page: usize, per_page: usize) -> ListQuery {
        ListQuery {
            search: search.to_string(),
            status: status.map(|s| s.to_string()),
            page,
            per_page,
        }
    }

    #[test]
    fn test_identical_filters_yield_identical_keys() {
        let a = QueryKey::list("expense", &query("luz", Some("pending"), 2, 25));
        let b = QueryKey::list("expense", &query("luz", Some("pending"), 2, 25));
        assert_eq!(a, b);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_different_filters_yield_different_keys() {
        let a = QueryKey::list("expense", &query("luz", None, 1, 25));
        let b = QueryKey::list("expense", &query("luz", None, 2, 25));
        assert_ne!(a, b);
    }

    #[test]
    fn test_render_is_canonical() {
        let key = QueryKey::list("payroll", &query("gomez", Some("approved"), 3, 50));
        assert_eq!(
            key.render(),
            "payroll/list?page=3&per_page=50&search=gomez&status=approved"
        );
    }

    #[test]
    fn test_empty_filters_are_omitted() {
        let key = QueryKey::list("expense", &query("", None, 1, 25));
        assert_eq!(key.render(), "expense/list?page=1&per_page=25");
    }

    #[test]
    fn test_scopes_do_not_collide() {
        assert_ne!(
            QueryKey::stats("expense"),
            QueryKey::list("expense", &ListQuery::default())
        );
        assert_eq!(QueryKey::stats("expense").render(), "expense/stats");
    }
}
