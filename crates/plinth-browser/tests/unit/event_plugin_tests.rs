//! Event plugins composed by hand

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use plinth_browser::dom::{Element, Event, EventHandler};
use plinth_browser::events::{
    DomEventsPlugin, EventManager, EventManagerPlugin, GestureConfig, GesturesPlugin,
    KeyEventsPlugin,
};

fn manager(config: GestureConfig) -> EventManager {
    let plugins: Vec<Arc<dyn EventManagerPlugin>> = vec![
        Arc::new(DomEventsPlugin),
        Arc::new(KeyEventsPlugin),
        Arc::new(GesturesPlugin::new(Arc::new(config))),
    ];
    EventManager::new(plugins)
}

fn counter() -> (Arc<AtomicUsize>, EventHandler) {
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = hits.clone();
    (
        hits,
        Arc::new(move |_: &Event| {
            seen.fetch_add(1, Ordering::SeqCst);
        }),
    )
}

#[test]
fn test_custom_gesture_is_routed_to_gestures_plugin() {
    let events = manager(GestureConfig::default().with_event("longpress"));
    let element = Arc::new(Element::new("button"));
    let (hits, handler) = counter();

    events.add_event_listener(&element, "longpress", handler).unwrap();
    element.dispatch(&Event::new("longpress"));

    assert_eq!(events.plugin_for("longpress").unwrap().name(), "gestures");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_first_claiming_plugin_wins() {
    // `keydown` alone is a plain DOM event, so the key plugin never sees it
    let events = manager(GestureConfig::default());
    assert_eq!(events.plugin_for("keydown").unwrap().name(), "dom-events");
    assert_eq!(events.plugin_for("keyup.esc").unwrap().name(), "key-events");
}

#[test]
fn test_escape_alias_matches_escape_key() {
    let events = manager(GestureConfig::default());
    let element = Arc::new(Element::new("dialog"));
    let (hits, handler) = counter();

    events.add_event_listener(&element, "keyup.esc", handler).unwrap();
    element.dispatch(&Event::key("keyup", "Escape"));
    element.dispatch(&Event::key("keydown", "Escape"));

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_listener_removal() {
    let events = manager(GestureConfig::default());
    let element = Arc::new(Element::new("div"));
    let (hits, handler) = counter();

    let id = events.add_event_listener(&element, "click", handler).unwrap();
    assert!(element.remove_listener(id));
    element.dispatch(&Event::new("click"));

    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(element.listener_count(), 0);
}
