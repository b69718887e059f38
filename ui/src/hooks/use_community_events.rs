use payloads::Event;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchState, use_cached_fetch};
use crate::{State, get_api_client};

/// Hook return type for community events
pub struct CommunityEventsHookReturn {
    pub past_event_data: Vec<Event>,
    /// Soonest first; index 0 is the featured call.
    pub upcoming_event_data: Vec<Event>,
    pub loading: bool,
    pub has_error: bool,
}

/// Hook to load community calls once and cache them in global state, so
/// returning to the landing page doesn't refetch.
#[hook]
pub fn use_community_events() -> CommunityEventsHookReturn {
    let (state, dispatch) = use_store::<State>();

    let fetched = use_cached_fetch(
        move || state.community_events.as_ref().cloned(),
        move || async move {
            let events = get_api_client().community_events().await.map_err(
                |e| {
                    tracing::error!("Failed to load community events: {e}");
                    e.to_string()
                },
            )?;
            tracing::debug!(
                upcoming = events.upcoming_events.len(),
                past = events.past_events.len(),
                "Loaded community events"
            );
            dispatch.reduce_mut(|state| {
                state.community_events = FetchState::Fetched(events);
            });
            Ok::<_, String>(())
        },
    );

    let events = fetched.data.as_ref().cloned().unwrap_or_default();

    CommunityEventsHookReturn {
        past_event_data: events.past_events,
        upcoming_event_data: events.upcoming_events,
        loading: fetched.is_loading,
        has_error: fetched.error.is_some(),
    }
}
