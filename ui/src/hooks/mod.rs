pub mod use_community_events;
pub mod use_fetch;

pub use use_community_events::use_community_events;
pub use use_fetch::{FetchHookReturn, use_cached_fetch};

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
