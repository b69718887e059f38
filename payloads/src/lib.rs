pub mod api_client;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use serde::{Deserialize, Serialize};

/// A single community call as published by the events API.
///
/// Events have no id of their own. The frontend identifies them by their
/// position in the list they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// ISO-8601 start time, e.g. `2024-06-01T10:00:00Z`. Kept as the raw
    /// string so a malformed date only affects how that one row renders.
    pub date: String,
    pub title: String,
    /// Link that adds the call to the viewer's calendar.
    pub calendar_link: String,
}
