use std::future::Future;
use yew::prelude::*;

use super::FetchState;

/// What the hook returns: cached data plus the state of the one request it
/// may have made.
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum RequestStatus {
    Idle,
    InFlight,
    Failed(String),
}

/// Fetch once on mount unless global state already holds the data.
///
/// `get_cached` reads the data from the yewdux store on every render.
/// `fetch_and_cache` runs at most once, on mount, when nothing was cached,
/// and is responsible for writing its result into the store.
///
/// Before the first result arrives, `is_loading` is true even though the
/// request has not been spawned yet, so callers never flash an empty state.
#[hook]
pub fn use_cached_fetch<T, GetCached, FetchAndCache, Fut>(
    get_cached: GetCached,
    fetch_and_cache: FetchAndCache,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    GetCached: Fn() -> Option<T> + 'static,
    FetchAndCache: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let status = use_state(|| RequestStatus::Idle);
    let data = match get_cached() {
        Some(cached) => FetchState::Fetched(cached),
        None => FetchState::NotFetched,
    };

    {
        let status = status.clone();
        let needs_fetch = !data.is_fetched();

        use_effect_with((), move |_| {
            if needs_fetch {
                status.set(RequestStatus::InFlight);
                yew::platform::spawn_local(async move {
                    match fetch_and_cache().await {
                        Ok(()) => status.set(RequestStatus::Idle),
                        Err(e) => status.set(RequestStatus::Failed(e)),
                    }
                });
            }
        });
    }

    let error = match &*status {
        RequestStatus::Failed(e) => Some(e.clone()),
        RequestStatus::Idle | RequestStatus::InFlight => None,
    };
    let is_loading = *status == RequestStatus::InFlight
        || (!data.is_fetched() && error.is_none());

    FetchHookReturn {
        data,
        is_loading,
        error,
    }
}
