use payloads::Event;
use yew::prelude::*;

use crate::analytics::{ClickTarget, EventKind, track_on};
use crate::i18n::Language;
use crate::utils::time::{DateFormat, ViewerTimeZone, render_event_date};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub event: Event,
    pub language: Language,
    /// Which list the row is in; reported as the analytics event name.
    pub kind: EventKind,
    pub time_zone: ViewerTimeZone,
    pub on_track: Callback<ClickTarget>,
}

/// One call in a list: compact date, then the title linking to the calendar
/// entry.
#[function_component]
pub fn EventRow(props: &Props) -> Html {
    let Props {
        event,
        language,
        kind,
        time_zone,
        ..
    } = props;

    let date = render_event_date(
        &event.date,
        *language,
        DateFormat::COMPACT,
        &time_zone.0,
    );

    let onclick: Callback<MouseEvent> =
        track_on(&props.on_track, ClickTarget::EventRow(*kind));

    html! {
        <div class="grid grid-cols-[auto_1fr] gap-6 mb-4">
            <span class="text-neutral-600 dark:text-neutral-400">
                {date}
            </span>
            <a
                href={event.calendar_link.clone()}
                {onclick}
                class="text-blue-600 dark:text-blue-400 hover:underline"
            >
                {&event.title}
            </a>
        </div>
    }
}
