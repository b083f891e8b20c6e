use contracts::domain::common::{DocumentStatus, ListQuery};
use leptos::prelude::*;

/// Filter state of one list page: search text, status filter and pagination.
/// Pages are 1-based.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    pub search: String,
    /// `None` means "all statuses"
    pub status_filter: Option<DocumentStatus>,
    pub page: usize,
    pub per_page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status_filter: None,
            page: 1,
            per_page: 25,
        }
    }
}

impl ListState {
    /// Wire form of the current filters.
    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            search: self.search.clone(),
            status: self
                .status_filter
                .as_ref()
                .map(|s| s.code().to_string()),
            page: self.page,
            per_page: self.per_page,
        }
    }

    /// Changing what is searched for restarts from the first page.
    pub fn set_search(&mut self, search: String) {
        if self.search != search {
            self.search = search;
            self.page = 1;
        }
    }

    pub fn set_status_filter(&mut self, status: Option<DocumentStatus>) {
        if self.status_filter != status {
            self.status_filter = status;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        if per_page > 0 && self.per_page != per_page {
            self.per_page = per_page;
            self.page = 1;
        }
    }
}

pub fn create_state() -> RwSignal<ListState> {
    RwSignal::new(ListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_change_resets_page() {
        let mut state = ListState {
            page: 4,
            ..Default::default()
        };
        state.set_search("rayban".into());
        assert_eq!(state.page, 1);
        assert_eq!(state.search, "rayban");
    }

    #[test]
    fn test_same_search_keeps_page() {
        let mut state = ListState {
            search: "rayban".into(),
            page: 4,
            ..Default::default()
        };
        state.set_search("rayban".into());
        assert_eq!(state.page, 4);
    }

    #[test]
    fn test_status_change_resets_page() {
        let mut state = ListState {
            page: 3,
            ..Default::default()
        };
        state.set_status_filter(Some(DocumentStatus::Pending));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_never_below_one() {
        let mut state = ListState::default();
        state.set_page(0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_to_query_maps_status_code() {
        let state = ListState {
            status_filter: Some(DocumentStatus::Approved),
            ..Default::default()
        };
        let query = state.to_query();
        assert_eq!(query.status.as_deref(), Some("approved"));
        assert!(query.is_valid());
    }
}
