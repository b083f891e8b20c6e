use super::QueryKey;
use contracts::error::ApiError;
use futures::channel::oneshot;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

type LoadResult = Result<Value, ApiError>;

enum Entry {
    /// Completed load. `stale` entries stay displayable but the next fetch
    /// reloads them.
    Ready { value: Value, stale: bool },
    /// A load is running; later callers for the same key park here instead of
    /// issuing a second request.
    InFlight {
        prior: Option<Value>,
        waiters: Vec<oneshot::Sender<LoadResult>>,
    },
}

enum Plan {
    Hit(Value),
    Wait(oneshot::Receiver<LoadResult>),
    Load,
}

/// Keyed cache of fetches with request coalescing and prefix invalidation.
///
/// One instance per app, provided via context at mount (see `app.rs`) and
/// dropped with it. Entries never expire on their own: they go stale only
/// when a mutation against their resource succeeds.
///
/// The mutex is never held across an await point.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<Mutex<HashMap<QueryKey, Entry>>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn map(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.inner.lock().expect("query cache lock poisoned")
    }

    /// Cached-or-fresh lookup. At most one loader runs per key at a time;
    /// concurrent callers share its outcome. A failed load never overwrites
    /// a previously cached value.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, loader: F) -> LoadResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = LoadResult>,
    {
        let plan = {
            let mut map = self.map();
            match map.get_mut(&key) {
                Some(Entry::Ready { value, stale: false }) => Plan::Hit(value.clone()),
                Some(Entry::InFlight { waiters, .. }) => {
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    Plan::Wait(rx)
                }
                _ => {
                    // miss or stale entry; keep the old value around so a
                    // failed reload does not lose it
                    let prior = match map.remove(&key) {
                        Some(Entry::Ready { value, .. }) => Some(value),
                        _ => None,
                    };
                    map.insert(
                        key.clone(),
                        Entry::InFlight {
                            prior,
                            waiters: Vec::new(),
                        },
                    );
                    Plan::Load
                }
            }
        };

        match plan {
            Plan::Hit(value) => Ok(value),
            Plan::Wait(rx) => rx.await.unwrap_or_else(|_| {
                Err(ApiError::Transport("la solicitud fue cancelada".into()))
            }),
            Plan::Load => {
                let result = loader().await;
                let waiters = self.settle(&key, &result);
                for waiter in waiters {
                    let _ = waiter.send(result.clone());
                }
                result
            }
        }
    }

    /// Record the outcome of a load and collect the parked waiters.
    fn settle(&self, key: &QueryKey, result: &LoadResult) -> Vec<oneshot::Sender<LoadResult>> {
        let mut map = self.map();
        let (prior, waiters) = match map.remove(key) {
            Some(Entry::InFlight { prior, waiters }) => (prior, waiters),
            Some(entry) => {
                map.insert(key.clone(), entry);
                (None, Vec::new())
            }
            None => (None, Vec::new()),
        };
        match result {
            Ok(value) => {
                map.insert(
                    key.clone(),
                    Entry::Ready {
                        value: value.clone(),
                        stale: false,
                    },
                );
            }
            Err(_) => {
                if let Some(value) = prior {
                    map.insert(key.clone(), Entry::Ready { value, stale: true });
                }
            }
        }
        waiters
    }

    /// Mark every entry of the resource (list, stats, detail) stale.
    /// Other resources are untouched.
    pub fn invalidate_prefix(&self, resource: &str) {
        let mut map = self.map();
        for (key, entry) in map.iter_mut() {
            if key.resource() == resource {
                if let Entry::Ready { stale, .. } = entry {
                    *stale = true;
                }
            }
        }
    }

    /// Last known value for the key, fresh or stale.
    pub fn peek(&self, key: &QueryKey) -> Option<Value> {
        match self.map().get(key) {
            Some(Entry::Ready { value, .. }) => Some(value.clone()),
            _ => None,
        }
    }

    /// True when the next `fetch` for the key would be served from cache.
    pub fn is_fresh(&self, key: &QueryKey) -> bool {
        matches!(
            self.map().get(key),
            Some(Entry::Ready { stale: false, .. })
        )
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ListQuery;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_loader(
        calls: Rc<Cell<u32>>,
        value: Value,
    ) -> impl FnOnce() -> std::pin::Pin<Box<dyn Future<Output = LoadResult>>> {
        move || {
            calls.set(calls.get() + 1);
            Box::pin(async move { Ok(value) })
        }
    }

    #[test]
    fn test_second_fetch_hits_cache() {
        let client = QueryClient::new();
        let key = QueryKey::list("expense", &ListQuery::default());
        let calls = Rc::new(Cell::new(0));

        let first = block_on(client.fetch(key.clone(), counting_loader(calls.clone(), json!(1))));
        let second = block_on(client.fetch(key.clone(), counting_loader(calls.clone(), json!(2))));

        assert_eq!(first.unwrap(), json!(1));
        // second call served from cache, loader untouched
        assert_eq!(second.unwrap(), json!(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_invalidate_prefix_forces_reload_and_spares_others() {
        let client = QueryClient::new();
        let expense_list = QueryKey::list("expense", &ListQuery::default());
        let expense_stats = QueryKey::stats("expense");
        let payroll_list = QueryKey::list("payroll", &ListQuery::default());
        let calls = Rc::new(Cell::new(0));

        for key in [&expense_list, &expense_stats, &payroll_list] {
            block_on(client.fetch(key.clone(), counting_loader(calls.clone(), json!("v1"))))
                .unwrap();
        }
        assert_eq!(calls.get(), 3);

        client.invalidate_prefix("expense");
        assert!(!client.is_fresh(&expense_list));
        assert!(!client.is_fresh(&expense_stats));
        assert!(client.is_fresh(&payroll_list));

        for key in [&expense_list, &expense_stats, &payroll_list] {
            block_on(client.fetch(key.clone(), counting_loader(calls.clone(), json!("v2"))))
                .unwrap();
        }
        // expense list + stats reloaded, payroll still cached
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_failed_reload_keeps_prior_value() {
        let client = QueryClient::new();
        let key = QueryKey::list("expense", &ListQuery::default());
        let calls = Rc::new(Cell::new(0));

        block_on(client.fetch(key.clone(), counting_loader(calls.clone(), json!("good")))).unwrap();
        client.invalidate_prefix("expense");

        let result = block_on(client.fetch(key.clone(), || async {
            Err(ApiError::Server {
                status: 500,
                message: "boom".into(),
            })
        }));
        assert!(result.is_err());

        // prior data survives (stale), and stays reloadable
        assert_eq!(client.peek(&key), Some(json!("good")));
        assert!(!client.is_fresh(&key));
    }

    #[test]
    fn test_error_on_cold_key_caches_nothing() {
        let client = QueryClient::new();
        let key = QueryKey::stats("payroll");

        let result = block_on(client.fetch(key.clone(), || async {
            Err(ApiError::Transport("sin red".into()))
        }));
        assert!(result.is_err());
        assert_eq!(client.peek(&key), None);
    }

    #[test]
    fn test_concurrent_fetches_coalesce_into_one_load() {
        let client = QueryClient::new();
        let key = QueryKey::stats("expense");
        let calls = Rc::new(Cell::new(0u32));
        let (release, gate) = oneshot::channel::<()>();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let first = {
            let client = client.clone();
            let key = key.clone();
            let calls = calls.clone();
            spawner
                .spawn_local_with_handle(async move {
                    client
                        .fetch(key, move || async move {
                            calls.set(calls.get() + 1);
                            let _ = gate.await;
                            Ok(json!({ "total": 7 }))
                        })
                        .await
                })
                .unwrap()
        };
        let second = {
            let client = client.clone();
            let key = key.clone();
            let calls = calls.clone();
            spawner
                .spawn_local_with_handle(async move {
                    client
                        .fetch(key, move || async move {
                            // must never run: the first load is in flight
                            calls.set(calls.get() + 100);
                            Ok(json!(null))
                        })
                        .await
                })
                .unwrap()
        };

        pool.run_until_stalled();
        assert_eq!(calls.get(), 1);

        release.send(()).unwrap();
        let (a, b) = pool.run_until(async move { (first.await, second.await) });
        assert_eq!(calls.get(), 1);
        assert_eq!(a.unwrap()["total"], 7);
        assert_eq!(b.unwrap()["total"], 7);
    }
}
