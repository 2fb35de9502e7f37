use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

use crate::error::BridgeError;

/// Lifecycle of one cached host collection.
#[derive(Debug)]
pub enum CacheState<T> {
    Uninitialized,
    Loading { stale: Option<Arc<[T]>> },
    Loaded(Arc<[T]>),
    Failed { error: String, stale: Option<Arc<[T]>> },
}

impl<T> Clone for CacheState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Uninitialized => Self::Uninitialized,
            Self::Loading { stale } => Self::Loading {
                stale: stale.clone(),
            },
            Self::Loaded(data) => Self::Loaded(Arc::clone(data)),
            Self::Failed { error, stale } => Self::Failed {
                error: error.clone(),
                stale: stale.clone(),
            },
        }
    }
}

impl<T> CacheState<T> {
    fn data(&self) -> Option<&Arc<[T]>> {
        match self {
            Self::Uninitialized => None,
            Self::Loading { stale } | Self::Failed { stale, .. } => stale.as_ref(),
            Self::Loaded(data) => Some(data),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Data was already present or a fetch was in flight.
    Skipped,
    Loaded { count: usize },
    Failed(BridgeError),
}

#[derive(Debug)]
struct CacheInner<T> {
    state: CacheState<T>,
    in_flight: usize,
}

/// Lazily fetched host collection shared by every consumer of a panel.
#[derive(Debug)]
pub struct CatalogCache<T> {
    label: &'static str,
    inner: Mutex<CacheInner<T>>,
}

impl<T> CatalogCache<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            inner: Mutex::new(CacheInner {
                state: CacheState::Uninitialized,
                in_flight: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> CacheState<T> {
        self.lock().state.clone()
    }

    /// Current collection; empty until the first successful fetch.
    pub fn snapshot(&self) -> Arc<[T]> {
        self.lock()
            .state
            .data()
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    pub fn is_loading(&self) -> bool {
        self.lock().in_flight > 0
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.lock().state, CacheState::Loaded(_))
    }

    pub fn error(&self) -> Option<String> {
        match &self.lock().state {
            CacheState::Failed { error, .. } => Some(error.clone()),
            _ => None,
        }
    }

    /// Fetches unless data is present or another fetch is already running.
    pub fn load<F>(&self, fetch: F) -> LoadOutcome
    where
        F: FnOnce() -> Result<Vec<T>, BridgeError>,
    {
        {
            let mut inner = self.lock();
            let has_data = inner.state.data().is_some_and(|data| !data.is_empty());
            if has_data || inner.in_flight > 0 {
                tracing::debug!(
                    cache = self.label,
                    in_flight = inner.in_flight,
                    "load skipped"
                );
                return LoadOutcome::Skipped;
            }
            Self::begin(&mut inner);
        }
        let guard = FetchGuard::new(self);
        self.finish(guard, fetch())
    }

    /// Always fetches. Success replaces the collection; failure keeps it.
    pub fn revalidate<F>(&self, fetch: F) -> LoadOutcome
    where
        F: FnOnce() -> Result<Vec<T>, BridgeError>,
    {
        Self::begin(&mut self.lock());
        let guard = FetchGuard::new(self);
        self.finish(guard, fetch())
    }

    fn begin(inner: &mut CacheInner<T>) {
        inner.in_flight += 1;
        if !matches!(inner.state, CacheState::Loading { .. }) {
            let stale = inner.state.data().cloned();
            inner.state = CacheState::Loading { stale };
        }
    }

    fn finish(
        &self,
        mut guard: FetchGuard<'_, T>,
        result: Result<Vec<T>, BridgeError>,
    ) -> LoadOutcome {
        guard.armed = false;
        let mut inner = self.lock();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        match result {
            Ok(items) => {
                let count = items.len();
                inner.state = CacheState::Loaded(Arc::from(items));
                tracing::debug!(cache = self.label, count, "catalog loaded");
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                tracing::warn!(cache = self.label, %err, "catalog fetch failed");
                let stale = inner.state.data().cloned();
                inner.state = CacheState::Failed {
                    error: err.to_string(),
                    stale,
                };
                LoadOutcome::Failed(err)
            }
        }
    }
}

/// Releases the in-flight slot of a fetch that unwound before `finish`.
struct FetchGuard<'a, T> {
    cache: &'a CatalogCache<T>,
    armed: bool,
}

impl<'a, T> FetchGuard<'a, T> {
    fn new(cache: &'a CatalogCache<T>) -> Self {
        Self { cache, armed: true }
    }
}

impl<T> Drop for FetchGuard<'_, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut inner = self.cache.lock();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        tracing::warn!(cache = self.cache.label, "catalog fetch aborted");
        if inner.in_flight == 0 {
            let stale = inner.state.data().cloned();
            inner.state = CacheState::Failed {
                error: FETCH_ABORTED.to_string(),
                stale,
            };
        }
    }
}

const FETCH_ABORTED: &str = "catalog fetch aborted";

impl<T: Send + Sync + 'static> CatalogCache<T> {
    pub fn spawn_load<F>(self: &Arc<Self>, fetch: F) -> JoinHandle<LoadOutcome>
    where
        F: FnOnce() -> Result<Vec<T>, BridgeError> + Send + 'static,
    {
        let cache = Arc::clone(self);
        std::thread::spawn(move || cache.load(fetch))
    }

    pub fn spawn_revalidate<F>(self: &Arc<Self>, fetch: F) -> JoinHandle<LoadOutcome>
    where
        F: FnOnce() -> Result<Vec<T>, BridgeError> + Send + 'static,
    {
        let cache = Arc::clone(self);
        std::thread::spawn(move || cache.revalidate(fetch))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;

    use super::*;

    fn failure() -> BridgeError {
        BridgeError::CallFailed {
            call: "getAvailableFonts",
            message: "timeout".to_string(),
        }
    }

    #[test]
    fn starts_uninitialized_and_empty() {
        let cache = CatalogCache::<String>::new("test");
        assert!(matches!(cache.state(), CacheState::Uninitialized));
        assert!(cache.snapshot().is_empty());
        assert!(!cache.is_loading());
        assert!(cache.error().is_none());
    }

    #[test]
    fn load_is_noop_once_data_is_present() {
        let cache = CatalogCache::new("test");
        assert_eq!(
            cache.load(|| Ok(vec!["Inter".to_string()])),
            LoadOutcome::Loaded { count: 1 }
        );
        assert_eq!(
            cache.load(|| Ok(vec!["Other".to_string()])),
            LoadOutcome::Skipped
        );
        assert_eq!(&*cache.snapshot(), ["Inter".to_string()]);
        assert!(cache.is_loaded());
    }

    #[test]
    fn load_refetches_when_previous_result_was_empty() {
        let cache = CatalogCache::new("test");
        cache.load(|| Ok(Vec::new()));
        assert_eq!(
            cache.load(|| Ok(vec!["Inter".to_string()])),
            LoadOutcome::Loaded { count: 1 }
        );
    }

    #[test]
    fn concurrent_loads_share_one_fetch() {
        let cache = Arc::new(CatalogCache::new("test"));
        let fetches = Arc::new(AtomicUsize::new(0));
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let worker = {
            let fetches = Arc::clone(&fetches);
            cache.spawn_load(move || {
                fetches.fetch_add(1, Ordering::SeqCst);
                started_tx.send(()).expect("test should be listening");
                release_rx.recv().expect("test should release the fetch");
                Ok(vec!["Inter".to_string()])
            })
        };

        started_rx.recv().expect("fetch should start");
        assert!(cache.is_loading());

        let second = cache.load(|| {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        });
        assert_eq!(second, LoadOutcome::Skipped);

        release_tx.send(()).expect("worker should be waiting");
        let first = worker.join().expect("worker should not panic");

        assert_eq!(first, LoadOutcome::Loaded { count: 1 });
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert!(!cache.is_loading());
    }

    #[test]
    fn most_recently_completed_fetch_wins() {
        let cache = Arc::new(CatalogCache::new("test"));
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let slow_load = cache.spawn_load(move || {
            started_tx.send(()).expect("test should be listening");
            release_rx.recv().expect("test should release the fetch");
            Ok(vec!["from-load".to_string()])
        });
        started_rx.recv().expect("load should start");

        let revalidated = cache.revalidate(|| Ok(vec!["from-revalidate".to_string()]));
        assert_eq!(revalidated, LoadOutcome::Loaded { count: 1 });
        assert_eq!(&*cache.snapshot(), ["from-revalidate".to_string()]);
        assert!(cache.is_loading());

        release_tx.send(()).expect("load should be waiting");
        slow_load.join().expect("load should not panic");

        assert_eq!(&*cache.snapshot(), ["from-load".to_string()]);
        assert!(!cache.is_loading());
    }

    #[test]
    fn failed_revalidate_keeps_previous_collection() {
        let cache = CatalogCache::new("test");
        cache.load(|| Ok(vec!["Inter".to_string()]));

        let outcome = cache.revalidate(|| Err(failure()));
        assert_eq!(outcome, LoadOutcome::Failed(failure()));
        assert_eq!(&*cache.snapshot(), ["Inter".to_string()]);
        assert_eq!(
            cache.error().as_deref(),
            Some("host call getAvailableFonts failed: timeout")
        );
        assert!(!cache.is_loading());
    }

    #[test]
    fn failed_first_load_leaves_empty_collection_and_allows_retry() {
        let cache = CatalogCache::<String>::new("test");
        assert_eq!(cache.load(|| Err(failure())), LoadOutcome::Failed(failure()));
        assert!(cache.snapshot().is_empty());
        assert!(cache.error().is_some());

        assert_eq!(
            cache.load(|| Ok(vec!["Inter".to_string()])),
            LoadOutcome::Loaded { count: 1 }
        );
        assert!(cache.error().is_none());
    }

    #[test]
    fn panicking_fetch_releases_the_cache() {
        let cache = Arc::new(CatalogCache::<String>::new("test"));
        let crashed = cache.spawn_load(|| -> Result<Vec<String>, BridgeError> {
            panic!("host crashed mid-fetch")
        });
        assert!(crashed.join().is_err());

        assert!(!cache.is_loading());
        assert_eq!(cache.error().as_deref(), Some(FETCH_ABORTED));
        assert_eq!(
            cache.load(|| Ok(vec!["Inter".to_string()])),
            LoadOutcome::Loaded { count: 1 }
        );
        assert_eq!(&*cache.snapshot(), ["Inter".to_string()]);
    }

    #[test]
    fn panicking_revalidate_keeps_previous_collection() {
        let cache = Arc::new(CatalogCache::new("test"));
        cache.load(|| Ok(vec!["Inter".to_string()]));

        let crashed = cache.spawn_revalidate(|| -> Result<Vec<String>, BridgeError> {
            panic!("host crashed mid-fetch")
        });
        assert!(crashed.join().is_err());

        assert!(!cache.is_loading());
        assert_eq!(&*cache.snapshot(), ["Inter".to_string()]);
    }

    #[test]
    fn revalidate_always_fetches() {
        let cache = CatalogCache::new("test");
        cache.load(|| Ok(vec!["Inter".to_string()]));
        assert_eq!(
            cache.revalidate(|| Ok(vec!["Inter".to_string(), "Roboto".to_string()])),
            LoadOutcome::Loaded { count: 2 }
        );
        assert_eq!(cache.snapshot().len(), 2);
    }
}
