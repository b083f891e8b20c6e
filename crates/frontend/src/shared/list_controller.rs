use super::list_state::{create_state, ListState};
use super::query::{QueryClient, QueryKey};
use super::service::ResourceService;
use contracts::domain::common::{DocumentStatus, Paginated};
use contracts::error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Wires the filter state, the query cache and a resource service together.
/// One instance per list page; rows are cached as raw JSON and decoded into
/// typed DTOs at the page edge.
#[derive(Clone)]
pub struct ListController {
    service: ResourceService,
    client: QueryClient,
    pub state: RwSignal<ListState>,
    pub rows: RwSignal<Vec<Value>>,
    pub total: RwSignal<usize>,
    pub last_page: RwSignal<usize>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    /// Load generation. Bumped on every load and on teardown, so a response
    /// that arrives late finds itself outdated and is dropped instead of
    /// updating a dead page.
    epoch: Arc<AtomicUsize>,
}

impl ListController {
    pub fn new(service: ResourceService, client: QueryClient) -> Self {
        Self {
            service,
            client,
            state: create_state(),
            rows: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            last_page: RwSignal::new(1),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            epoch: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn resource(&self) -> &'static str {
        self.service.collection()
    }

    /// Fetch the current page through the cache. Previously shown rows stay
    /// on screen until the response lands.
    pub fn load(&self) {
        let this = self.clone();
        let epoch = self.epoch.fetch_add(1, Ordering::Relaxed) + 1;

        spawn_local(async move {
            this.loading.set(true);
            let query = this.state.with_untracked(|s| s.to_query());
            let key = QueryKey::list(this.service.collection(), &query);
            let service = this.service;
            let loader_query = query.clone();

            let result = this
                .client
                .fetch(key, move || async move {
                    let page = service.list::<Value>(&loader_query).await?;
                    serde_json::to_value(page)
                        .map_err(|e| ApiError::Transport(format!("cache encode: {}", e)))
                })
                .await;

            if this.epoch.load(Ordering::Relaxed) != epoch {
                // superseded by a newer load or the page was torn down
                return;
            }

            match result {
                Ok(value) => match serde_json::from_value::<Paginated<Value>>(value) {
                    Ok(page) => {
                        let last_page = page.last_page.max(1);
                        this.rows.set(page.data);
                        this.total.set(page.total);
                        this.last_page.set(last_page);
                        this.error.set(None);
                        // server may have shrunk below the current page
                        let current = this.state.with_untracked(|s| s.page);
                        if current > last_page {
                            this.state.update(|s| s.set_page(last_page));
                            this.load();
                            return;
                        }
                    }
                    Err(e) => {
                        this.error
                            .set(Some(ApiError::Transport(format!("cache decode: {}", e))));
                    }
                },
                Err(e) => this.error.set(Some(e)),
            }
            this.loading.set(false);
        });
    }

    /// Explicit user refresh: bypass the cache for this resource.
    pub fn force_refresh(&self) {
        self.client.invalidate_prefix(self.resource());
        self.load();
    }

    /// Call on page unmount; drops any in-flight response.
    pub fn cancel(&self) {
        self.epoch.fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_search(&self, search: String) {
        self.state.update(|s| s.set_search(search));
        self.load();
    }

    pub fn set_status_filter(&self, status: Option<DocumentStatus>) {
        self.state.update(|s| s.set_status_filter(status));
        self.load();
    }

    pub fn set_page(&self, page: usize) {
        self.state.update(|s| s.set_page(page));
        self.load();
    }

    pub fn set_per_page(&self, per_page: usize) {
        self.state.update(|s| s.set_per_page(per_page));
        self.load();
    }

    /// Rows decoded into the page's typed DTO; rows the page cannot decode
    /// are skipped with a log entry rather than blanking the table.
    pub fn typed_rows<T: DeserializeOwned>(&self) -> Vec<T> {
        self.rows.with(|rows| {
            rows.iter()
                .filter_map(|value| match serde_json::from_value(value.clone()) {
                    Ok(row) => Some(row),
                    Err(e) => {
                        log::warn!("{}: fila descartada: {}", self.service.collection(), e);
                        None
                    }
                })
                .collect()
        })
    }
}

/// Fetch a resource's aggregate stats through the cache into a signal.
/// Stats share the resource's invalidation prefix, so every successful
/// mutation refreshes them on the next load.
pub fn load_stats<S>(client: QueryClient, service: ResourceService, target: RwSignal<S>)
where
    S: DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        let key = QueryKey::stats(service.collection());
        let result = client
            .fetch(key, move || async move {
                service.stats::<Value>().await
            })
            .await;
        match result {
            Ok(value) => match serde_json::from_value::<S>(value) {
                Ok(stats) => target.set(stats),
                Err(e) => log::warn!("{}: stats ilegibles: {}", service.collection(), e),
            },
            Err(e) => log::warn!("{}: stats no disponibles: {}", service.collection(), e),
        }
    });
}
