use serde::{Deserialize, Serialize};

use crate::Event;

/// Community calls split around the current time.
///
/// `upcoming_events` is sorted soonest first; `past_events` is in the order
/// the API chose to display them (most recent first).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityEvents {
    pub past_events: Vec<Event>,
    pub upcoming_events: Vec<Event>,
}
