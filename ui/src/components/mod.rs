pub mod community_events;
pub mod event_row;
pub mod events_panel;

pub use community_events::{CommunityEvents, CommunityEventsView};
pub use event_row::EventRow;
pub use events_panel::EventsPanel;
