use super::notifications::ToastService;
use super::query::QueryClient;
use contracts::error::ApiError;
use leptos::prelude::*;
use std::collections::HashSet;
use std::future::Future;

#[derive(Clone, Debug, PartialEq)]
pub enum MutationState {
    Idle,
    Pending,
    Success,
    Error(String),
}

/// Invalidation policy: only a successful mutation touches the cache.
/// Returns whether the resource's key space was invalidated.
pub fn apply_outcome(
    client: &QueryClient,
    resource: &str,
    result: &Result<(), ApiError>,
) -> bool {
    match result {
        Ok(()) => {
            client.invalidate_prefix(resource);
            true
        }
        Err(_) => false,
    }
}

/// Runs create/update/delete calls and applies the completion policy:
/// success invalidates the resource's cached list + stats and confirms to the
/// user; failure leaves everything untouched and reports the operation that
/// failed. No automatic retry.
#[derive(Clone)]
pub struct MutationExecutor {
    client: QueryClient,
    toasts: ToastService,
    resource: &'static str,
    pub state: RwSignal<MutationState>,
    /// Rows with a mutation in flight; their action controls stay disabled so
    /// edits to the same row are serialized.
    pub pending_rows: RwSignal<HashSet<String>>,
}

impl MutationExecutor {
    pub fn new(client: QueryClient, toasts: ToastService, resource: &'static str) -> Self {
        Self {
            client,
            toasts,
            resource,
            state: RwSignal::new(MutationState::Idle),
            pending_rows: RwSignal::new(HashSet::new()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.get() == MutationState::Pending
    }

    pub fn is_row_pending(&self, id: &str) -> bool {
        self.pending_rows.with(|rows| rows.contains(id))
    }

    /// `operation` names the action for the failure toast ("eliminar",
    /// "aprobar", ...). `row_id` scopes the pending lock to one row; a second
    /// mutation on the same row is dropped while the first is in flight.
    pub fn execute<Fut>(
        &self,
        operation: String,
        row_id: Option<String>,
        fut: Fut,
        on_success: impl Fn() + 'static,
    ) where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        if let Some(id) = &row_id {
            if self.is_row_pending(id) {
                return;
            }
            let id = id.clone();
            self.pending_rows.update(|rows| {
                rows.insert(id);
            });
        }
        self.state.set(MutationState::Pending);

        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fut.await;
            if let Some(id) = &row_id {
                this.pending_rows.update(|rows| {
                    rows.remove(id);
                });
            }
            if apply_outcome(&this.client, this.resource, &result) {
                this.state.set(MutationState::Success);
                this.toasts.success("Operación realizada correctamente");
                on_success();
            } else if let Err(e) = result {
                log::warn!("mutation '{}' on {} failed: {}", operation, this.resource, e);
                this.state.set(MutationState::Error(e.to_string()));
                this.toasts
                    .error(format!("No se pudo {}: {}", operation, e));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::QueryKey;
    use contracts::domain::common::ListQuery;
    use futures::executor::block_on;
    use serde_json::json;

    fn warm(client: &QueryClient, key: &QueryKey) {
        block_on(client.fetch(key.clone(), || async { Ok(json!("rows")) })).unwrap();
        assert!(client.is_fresh(key));
    }

    #[test]
    fn test_success_invalidates_resource_keys() {
        let client = QueryClient::new();
        let list_key = QueryKey::list("expense", &ListQuery::default());
        let stats_key = QueryKey::stats("expense");
        warm(&client, &list_key);
        warm(&client, &stats_key);

        assert!(apply_outcome(&client, "expense", &Ok(())));
        assert!(!client.is_fresh(&list_key));
        assert!(!client.is_fresh(&stats_key));
    }

    #[test]
    fn test_failed_mutation_leaves_cache_intact() {
        let client = QueryClient::new();
        let list_key = QueryKey::list("expense", &ListQuery::default());
        warm(&client, &list_key);

        let failed = Err(ApiError::Server {
            status: 500,
            message: "delete rejected".into(),
        });
        assert!(!apply_outcome(&client, "expense", &failed));
        // row data unchanged and still fresh, no refetch will happen
        assert!(client.is_fresh(&list_key));
        assert_eq!(client.peek(&list_key), Some(json!("rows")));
    }

    #[test]
    fn test_success_spares_unrelated_resources() {
        let client = QueryClient::new();
        let expense = QueryKey::list("expense", &ListQuery::default());
        let payroll = QueryKey::list("payroll", &ListQuery::default());
        warm(&client, &expense);
        warm(&client, &payroll);

        apply_outcome(&client, "expense", &Ok(()));
        assert!(!client.is_fresh(&expense));
        assert!(client.is_fresh(&payroll));
    }
}
