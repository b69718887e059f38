use payloads::Event;
use ui::components::CommunityEventsView;
use ui::components::community_events::CommunityEventsViewProps;
use ui::i18n::Language;
use ui::utils::time::ViewerTimeZone;
use yew::{Callback, ServerRenderer};

const LOADING: &str = "Loading...";
const TRY_AGAIN: &str = "Unable to load data. Try again later.";

fn call(date: &str, title: &str, calendar_link: &str) -> Event {
    Event {
        date: date.to_string(),
        title: title.to_string(),
        calendar_link: calendar_link.to_string(),
    }
}

fn two_upcoming() -> Vec<Event> {
    vec![
        call("2024-06-01T10:00:00Z", "Call A", "https://x/a"),
        call("2024-06-08T10:00:00Z", "Call B", "https://x/b"),
    ]
}

async fn render(
    upcoming: Vec<Event>,
    past: Vec<Event>,
    loading: bool,
    has_error: bool,
    language: Language,
) -> String {
    ServerRenderer::<CommunityEventsView>::with_props(move || {
        CommunityEventsViewProps {
            upcoming,
            past,
            loading,
            has_error,
            language,
            time_zone: ViewerTimeZone::utc(),
            on_track: Callback::noop(),
        }
    })
    .hydratable(false)
    .render()
    .await
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {html}"))
}

#[tokio::test]
async fn test_featured_call_and_remaining_upcoming() {
    let html = render(two_upcoming(), vec![], false, false, Language::En).await;

    // Featured block: full format and the viewer's zone
    assert!(html.contains("Call A"));
    assert!(html.contains("June 1, 2024 at 10:00"));
    assert!(html.contains("(UTC)"));
    assert_eq!(html.matches("Call A").count(), 1);

    // Upcoming list holds only the second call, in compact format
    let upcoming_heading = position(&html, "Upcoming calls");
    let past_heading = position(&html, "Previous calls");
    let call_b = position(&html, "Call B");
    assert!(upcoming_heading < call_b && call_b < past_heading);
    assert!(html.contains("Jun 8, 2024"));
    assert!(!html.contains("June 8, 2024"));
    assert!(html.contains(r#"href="https://x/b""#));
    assert!(!html.contains("No upcoming calls"));

    assert!(html.contains("There are no past calls"));

    // Call to action
    assert!(html.contains(r#"href="/discord/""#));
    assert!(html.contains("Join Discord"));
    assert!(html.contains("Add to calendar"));
    assert!(html.contains(r#"href="https://x/a""#));
}

#[tokio::test]
async fn test_loading_hides_everything_else() {
    let past = vec![call("2024-05-25T10:00:00Z", "Old call", "https://x/old")];
    let html = render(two_upcoming(), past, true, true, Language::En).await;

    assert_eq!(html.matches(LOADING).count(), 3);
    assert!(!html.contains(TRY_AGAIN));
    assert!(!html.contains("Call A"));
    assert!(!html.contains("Call B"));
    assert!(!html.contains("Old call"));
    assert!(!html.contains("Join Discord"));
}

#[tokio::test]
async fn test_error_beats_data() {
    let past = vec![call("2024-05-25T10:00:00Z", "Old call", "https://x/old")];
    let html = render(two_upcoming(), past, false, true, Language::En).await;

    assert_eq!(html.matches(TRY_AGAIN).count(), 3);
    assert!(!html.contains("Call A"));
    assert!(!html.contains("Call B"));
    assert!(!html.contains("Old call"));
    assert!(!html.contains("No upcoming calls"));
    assert!(!html.contains("There are no past calls"));
    assert!(html.contains("Join Discord"));
}

#[tokio::test]
async fn test_no_upcoming_calls() {
    let html = render(vec![], vec![], false, false, Language::En).await;

    assert!(html.contains("No events planned"));
    assert!(html.contains("No upcoming calls"));
    assert!(html.contains("There are no past calls"));
    assert!(html.contains("Join Discord"));
    assert!(!html.contains("Add to calendar"));
}

#[tokio::test]
async fn test_only_featured_call() {
    let upcoming = two_upcoming()[..1].to_vec();
    let html = render(upcoming, vec![], false, false, Language::En).await;

    assert!(html.contains("Call A"));
    assert!(html.contains("No upcoming calls"));
    assert!(!html.contains("No events planned"));
}

#[tokio::test]
async fn test_past_calls_keep_order() {
    let past = vec![
        call("2024-05-25T10:00:00Z", "May call", "https://x/may"),
        call("2024-04-27T10:00:00Z", "April call", "https://x/april"),
    ];
    let html = render(vec![], past, false, false, Language::En).await;

    let may = position(&html, "May call");
    let april = position(&html, "April call");
    assert!(position(&html, "Previous calls") < may);
    assert!(may < april);
    assert!(html.contains("May 25, 2024"));
    assert!(html.contains("Apr 27, 2024"));
    assert!(!html.contains("There are no past calls"));
}

#[tokio::test]
async fn test_calls_sharing_a_start_time() {
    let past = vec![
        call("2024-05-25T10:00:00Z", "Main call", "https://x/main"),
        call("2024-05-25T10:00:00Z", "Breakout", "https://x/breakout"),
    ];
    let html = render(vec![], past, false, false, Language::En).await;

    assert!(html.contains("Main call"));
    assert!(html.contains("Breakout"));
    assert_eq!(html.matches("May 25, 2024").count(), 2);
}

#[tokio::test]
async fn test_malformed_date_is_shown_raw() {
    let past = vec![call("sometime soon", "Mystery call", "https://x/m")];
    let html = render(vec![], past, false, false, Language::En).await;

    assert!(html.contains("sometime soon"));
    assert!(html.contains("Mystery call"));
}

#[tokio::test]
async fn test_german() {
    let html = render(two_upcoming(), vec![], false, false, Language::De).await;

    assert!(html.contains(r#"lang="de""#));
    assert!(html.contains("1. Juni 2024 um 10:00"));
    assert!(html.contains("8. Juni 2024"));
    assert!(html.contains("Kommende Calls"));
    assert!(html.contains("Zum Kalender hinzufügen"));
    assert!(html.contains("Es gibt keine vergangenen Calls"));
}
