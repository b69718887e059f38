use payloads::Event;
use yew::prelude::*;

use crate::analytics::{self, ClickTarget, EventKind, track_on};
use crate::components::EventsPanel;
use crate::components::events_panel::{error_message, loading_message};
use crate::hooks::use_community_events;
use crate::i18n::{Language, resolve, use_language};
use crate::utils::time::{DateFormat, ViewerTimeZone, render_event_date};

/// Where the "Join Discord" button points. Served as a redirect by the site.
pub const DISCORD_PATH: &str = "/discord/";

/// What the highlighted block at the top of the widget shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeaturedState<'a> {
    Loading,
    Error,
    NoEventsPlanned,
    /// The soonest upcoming call.
    Next(&'a Event),
}

impl<'a> FeaturedState<'a> {
    pub fn new(loading: bool, has_error: bool, upcoming: &'a [Event]) -> Self {
        if loading {
            Self::Loading
        } else if has_error {
            Self::Error
        } else {
            upcoming.first().map_or(Self::NoEventsPlanned, Self::Next)
        }
    }
}

/// Upcoming calls listed below the featured one.
pub fn upcoming_calls(upcoming: &[Event]) -> &[Event] {
    upcoming.get(1..).unwrap_or_default()
}

/// One of the two lists of calls beside the featured block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallList<'a> {
    /// Also the analytics name reported by the list's rows.
    pub kind: EventKind,
    pub title_key: &'static str,
    pub empty_key: &'static str,
    pub events: &'a [Event],
}

/// The upcoming calls after the featured one, then every past call.
pub fn call_lists<'a>(
    upcoming: &'a [Event],
    past: &'a [Event],
) -> [CallList<'a>; 2] {
    [
        CallList {
            kind: EventKind::Upcoming,
            title_key: "page-index:community-events-upcoming-calls",
            empty_key: "page-index:community-events-no-upcoming-calls",
            events: upcoming_calls(upcoming),
        },
        CallList {
            kind: EventKind::Past,
            title_key: "page-index:community-events-previous-calls",
            empty_key: "page-index:community-events-there-are-no-past-calls",
            events: past,
        },
    ]
}

/// A link under the featured call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CallToAction<'a> {
    JoinDiscord,
    AddToCalendar(&'a Event),
}

impl<'a> CallToAction<'a> {
    pub fn href(&self) -> &'a str {
        match self {
            Self::JoinDiscord => DISCORD_PATH,
            Self::AddToCalendar(event) => &event.calendar_link,
        }
    }

    pub fn target(&self) -> ClickTarget {
        match self {
            Self::JoinDiscord => ClickTarget::Discord,
            Self::AddToCalendar(_) => ClickTarget::AddToCalendar,
        }
    }
}

/// Discord always. The calendar link whenever there is a next call, even if
/// the lists failed to refresh.
pub fn calls_to_action(upcoming: &[Event]) -> Vec<CallToAction<'_>> {
    let mut links = vec![CallToAction::JoinDiscord];
    links.extend(upcoming.first().map(CallToAction::AddToCalendar));
    links
}

/// Landing page section for community calls, wired to the events API and
/// analytics.
#[function_component]
pub fn CommunityEvents() -> Html {
    let language = use_language();
    let events = use_community_events();
    let time_zone = use_memo((), |_| ViewerTimeZone::system());
    let on_track = use_callback((), |target: ClickTarget, _| {
        analytics::track_click(target);
    });

    html! {
        <CommunityEventsView
            upcoming={events.upcoming_event_data}
            past={events.past_event_data}
            loading={events.loading}
            has_error={events.has_error}
            {language}
            time_zone={(*time_zone).clone()}
            {on_track}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct CommunityEventsViewProps {
    /// Soonest first.
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
    pub loading: bool,
    pub has_error: bool,
    pub language: Language,
    pub time_zone: ViewerTimeZone,
    pub on_track: Callback<ClickTarget>,
}

/// Renders the widget from already-fetched data.
#[function_component]
pub fn CommunityEventsView(props: &CommunityEventsViewProps) -> Html {
    let language = props.language;
    let t = |key: &str| resolve(language, key);

    html! {
        <section
            lang={language.tag()}
            class="flex flex-col lg:flex-row w-full sm:pt-8 lg:px-8"
        >
            <div class="flex items-center justify-center w-full lg:w-2/5">
                <div class="px-8 lg:pl-0">
                    <h2 class="text-3xl font-bold text-neutral-900 dark:text-white mb-4">
                        {t("page-index:community-events-content-heading")}
                    </h2>
                    <p class="mb-4 text-neutral-700 dark:text-neutral-300">
                        {t("page-index:community-events-content-1")}
                    </p>
                    <p class="mb-4 text-neutral-700 dark:text-neutral-300">
                        {t("page-index:community-events-content-2")}
                    </p>
                </div>
            </div>
            <div class="flex flex-col lg:flex-row w-full lg:w-3/5">
                <div class="flex flex-col w-full lg:w-1/2 px-8 py-16 text-center \
                            bg-neutral-100 dark:bg-neutral-800">
                    {featured(props)}
                </div>
                <div class="flex flex-col w-full lg:w-1/2 p-8 \
                            bg-white dark:bg-neutral-900">
                    {for call_lists(&props.upcoming, &props.past)
                        .into_iter()
                        .enumerate()
                        .map(|(index, list)| html! {
                            <div class={classes!((index > 0).then_some("mt-4"))}>
                                <EventsPanel
                                    title={t(list.title_key)}
                                    empty_message={t(list.empty_key)}
                                    events={list.events.to_vec()}
                                    loading={props.loading}
                                    has_error={props.has_error}
                                    kind={list.kind}
                                    {language}
                                    time_zone={props.time_zone.clone()}
                                    on_track={props.on_track.clone()}
                                />
                            </div>
                        })}
                </div>
            </div>
        </section>
    }
}

/// The next call, or why there isn't one, followed by the call-to-action
/// links.
fn featured(props: &CommunityEventsViewProps) -> Html {
    let language = props.language;

    let headline = match FeaturedState::new(
        props.loading,
        props.has_error,
        &props.upcoming,
    ) {
        // The call-to-action links wait for the first load.
        FeaturedState::Loading => return loading_message(language),
        FeaturedState::Error => error_message(language),
        FeaturedState::NoEventsPlanned => html! {
            <p class="text-3xl font-bold mb-8">
                {resolve(language, "page-index:community-events-no-events-planned")}
            </p>
        },
        FeaturedState::Next(event) => html! {
            <div class="flex-1">
                <p class="text-3xl font-bold leading-snug">{&event.title}</p>
                <p class="text-xl">
                    {render_event_date(
                        &event.date,
                        language,
                        DateFormat::FULL,
                        &props.time_zone.0,
                    )}
                </p>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("({})", props.time_zone.label())}
                </p>
            </div>
        },
    };

    let links = calls_to_action(&props.upcoming)
        .into_iter()
        .map(|link| {
            let href = link.href().to_string();
            let onclick: Callback<MouseEvent> =
                track_on(&props.on_track, link.target());
            match link {
                CallToAction::JoinDiscord => html! {
                    <a
                        href={href}
                        {onclick}
                        class="inline-flex items-center justify-center gap-2 px-4 py-2 \
                               rounded-md font-medium text-white bg-indigo-600 \
                               hover:bg-indigo-700 transition-colors duration-200"
                    >
                        {"Join Discord"}
                    </a>
                },
                CallToAction::AddToCalendar(_) => html! {
                    <a
                        href={href}
                        {onclick}
                        class="font-bold text-blue-600 dark:text-blue-400 hover:underline"
                    >
                        {resolve(language, "page-index:community-events-add-to-calendar")}
                    </a>
                },
            }
        })
        .collect::<Html>();

    html! {
        <div class="flex flex-col h-full gap-8">
            {headline}
            <div class="flex flex-col gap-2">
                {links}
            </div>
        </div>
    }
}
