use payloads::responses;
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Community events (managed by use_community_events) ===
    pub community_events: FetchState<responses::CommunityEvents>,
}
