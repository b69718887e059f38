use payloads::Event;
use yew::prelude::*;

use crate::analytics::{ClickTarget, EventKind};
use crate::components::EventRow;
use crate::i18n::{Language, resolve};
use crate::utils::time::ViewerTimeZone;

/// What a list of calls should show. Loading wins over error, error over
/// empty, so a failed fetch with stale items still reports the failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelState<'a> {
    Loading,
    Error,
    Empty,
    Populated(&'a [Event]),
}

impl<'a> PanelState<'a> {
    pub fn new(loading: bool, has_error: bool, events: &'a [Event]) -> Self {
        if loading {
            Self::Loading
        } else if has_error {
            Self::Error
        } else if events.is_empty() {
            Self::Empty
        } else {
            Self::Populated(events)
        }
    }
}

pub(crate) fn loading_message(language: Language) -> Html {
    html! {
        <p>{resolve(language, "loading")}</p>
    }
}

pub(crate) fn error_message(language: Language) -> Html {
    html! {
        <p class="text-red-600 dark:text-red-400">
            {resolve(language, "loading-error-try-again-later")}
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    /// Shown when the list is empty; wording differs per list.
    pub empty_message: AttrValue,
    pub events: Vec<Event>,
    pub loading: bool,
    pub has_error: bool,
    pub kind: EventKind,
    pub language: Language,
    pub time_zone: ViewerTimeZone,
    pub on_track: Callback<ClickTarget>,
}

#[function_component]
pub fn EventsPanel(props: &Props) -> Html {
    let language = props.language;

    let body = match PanelState::new(
        props.loading,
        props.has_error,
        &props.events,
    ) {
        PanelState::Loading => loading_message(language),
        PanelState::Error => error_message(language),
        PanelState::Empty => html! {
            <p class="mx-auto text-center text-neutral-600 dark:text-neutral-400">
                {props.empty_message.as_str()}
            </p>
        },
        PanelState::Populated(events) => events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                // Position keeps keys unique when two calls share a start time.
                html! {
                    <EventRow
                        key={format!("{index}-{}", event.date)}
                        event={event.clone()}
                        {language}
                        kind={props.kind}
                        time_zone={props.time_zone.clone()}
                        on_track={props.on_track.clone()}
                    />
                }
            })
            .collect::<Html>(),
    };

    html! {
        <div>
            <h3 class="text-lg font-bold mb-2">{props.title.as_str()}</h3>
            <hr class="mb-4 border-neutral-200 dark:border-neutral-700" />
            {body}
        </div>
    }
}
