//! Click tracking for the landing page widgets.
//!
//! Events go to the Matomo queue (`window._paq`) when the page loads the
//! Matomo snippet, and are always logged. Tracking must never get in the way
//! of navigation, so every failure here is logged and swallowed.

use yew::Callback;

pub const CATEGORY: &str = "CommunityEventsWidget";
pub const ACTION_CLICKED: &str = "clicked";

/// Which list an event row belongs to. Also the analytics name for clicks on
/// that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EventKind {
    #[display("upcoming")]
    Upcoming,
    #[display("past")]
    Past,
}

/// A clickable control in the community events widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ClickTarget {
    #[display("discord")]
    Discord,
    #[display("Add to calendar")]
    AddToCalendar,
    #[display("{_0}")]
    EventRow(EventKind),
}

/// Click handler for a link: reports `target` and leaves the event alone, so
/// navigation goes ahead.
pub fn track_on<E: 'static>(
    on_track: &Callback<ClickTarget>,
    target: ClickTarget,
) -> Callback<E> {
    on_track.reform(move |_: E| target)
}

/// Record a click on one of the widget's controls.
pub fn track_click(target: ClickTarget) {
    track(CATEGORY, ACTION_CLICKED, &target.to_string());
}

/// Fire-and-forget custom event.
pub fn track(category: &str, action: &str, name: &str) {
    tracing::info!(category, action, name, "Tracking event");

    if let Err(e) = push_to_matomo(category, action, name) {
        tracing::warn!("Failed to queue analytics event: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn push_to_matomo(_: &str, _: &str, _: &str) -> Result<(), String> {
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn push_to_matomo(
    category: &str,
    action: &str,
    name: &str,
) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let queue = js_sys::Reflect::get(&window, &JsValue::from_str("_paq"))?;
    if queue.is_undefined() {
        tracing::debug!("Matomo not loaded, skipping");
        return Ok(());
    }

    let queue: js_sys::Array = queue.dyn_into()?;
    let entry = js_sys::Array::of4(
        &JsValue::from_str("trackEvent"),
        &JsValue::from_str(category),
        &JsValue::from_str(action),
        &JsValue::from_str(name),
    );
    queue.push(&JsValue::from(entry));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_target_names() {
        assert_eq!(ClickTarget::Discord.to_string(), "discord");
        assert_eq!(ClickTarget::AddToCalendar.to_string(), "Add to calendar");
        assert_eq!(
            ClickTarget::EventRow(EventKind::Upcoming).to_string(),
            "upcoming"
        );
        assert_eq!(ClickTarget::EventRow(EventKind::Past).to_string(), "past");
    }

    #[test]
    fn test_track_on_reports_its_target() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let clicks = Rc::new(RefCell::new(Vec::new()));
        let on_track = {
            let clicks = clicks.clone();
            Callback::from(move |target| clicks.borrow_mut().push(target))
        };

        track_on::<()>(&on_track, ClickTarget::Discord).emit(());
        track_on::<()>(&on_track, ClickTarget::EventRow(EventKind::Past))
            .emit(());

        assert_eq!(
            *clicks.borrow(),
            vec![ClickTarget::Discord, ClickTarget::EventRow(EventKind::Past)]
        );
    }

    #[test]
    fn test_track_off_browser_does_not_panic() {
        track_click(ClickTarget::Discord);
    }
}
