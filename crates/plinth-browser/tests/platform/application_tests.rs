//! Application-level services composed over the browser platform

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use plinth_browser::constants::WEB_ANIMATIONS_TAG;
use plinth_browser::dom::{ComponentType, Event, EventHandler, SharedStylesHost};
use plinth_browser::platforms::{bootstrap_module, create_browser_platform};
use plinth_browser::security::SecurityContext;
use plinth_browser::tokens::{
    ANIMATION_DRIVER, DEBUG_ROOT_RENDERER, DOCUMENT, DOM_ROOT_RENDERER, DOM_SANITIZATION_SERVICE,
    DOM_SHARED_STYLES_HOST, EVENT_MANAGER, EXCEPTION_HANDLER, ROOT_RENDERER,
    SANITIZATION_SERVICE, SHARED_STYLES_HOST, TESTABILITY, TESTABILITY_REGISTRY,
};
use plinth_domain::constants::NOOP_CAPABILITY_TAG;
use plinth_domain::error::Error;
use plinth_domain::value_objects::service_address;
use plinth_infrastructure::constants::APPLICATION_CONTEXT_NAME;

use super::{TEST_URL, animated_config, boot, debug_policy, test_config};

fn counting_handler() -> (Arc<AtomicUsize>, EventHandler) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let handler: EventHandler = Arc::new(move |_: &Event| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (hits, handler)
}

#[test]
fn test_application_is_child_of_platform() {
    let (platform, app) = boot(&test_config(&[]));

    assert_eq!(app.name(), APPLICATION_CONTEXT_NAME);
    assert!(Arc::ptr_eq(app.parent().unwrap(), &platform));
    assert!(app.initialized_actions().is_empty());
}

#[test]
fn test_document_comes_from_installed_adapter() {
    let (_, app) = boot(&test_config(&[]));
    let document = app.get(&*DOCUMENT).unwrap();
    assert_eq!(document.url(), TEST_URL);
    assert_eq!(document.title(), "Plinth");
}

#[test]
fn test_application_testability_is_registered_for_body() {
    let (platform, app) = boot(&test_config(&[]));
    let document = app.get(&*DOCUMENT).unwrap();
    let registered = platform
        .get(&*TESTABILITY_REGISTRY)
        .unwrap()
        .get_testability(document.body())
        .unwrap();
    assert!(Arc::ptr_eq(&registered, &app.get(&*TESTABILITY).unwrap()));
}

#[test]
fn test_sanitization_alias_is_the_same_service() {
    let (_, app) = boot(&test_config(&[]));
    let general = app.get(&*SANITIZATION_SERVICE).unwrap();
    let dom = app.get(&*DOM_SANITIZATION_SERVICE).unwrap();

    assert_eq!(service_address(&general), service_address(&dom));
    assert_eq!(
        general.sanitize(SecurityContext::Url, "javascript:alert(1)").unwrap(),
        "unsafe:javascript:alert(1)"
    );
}

#[test]
fn test_root_renderer_aliases_dom_renderer() {
    let (_, app) = boot(&test_config(&[]));
    let root = app.get(&*ROOT_RENDERER).unwrap();
    let dom = app.get(&*DOM_ROOT_RENDERER).unwrap();
    assert!(Arc::ptr_eq(&root, &dom));
    assert!(app.get_optional(&*DEBUG_ROOT_RENDERER).unwrap().is_none());
}

#[test]
fn test_event_plugins_are_asked_in_registration_order() {
    let (_, app) = boot(&test_config(&[]));
    let events = app.get(&*EVENT_MANAGER).unwrap();

    assert_eq!(events.plugin_names(), vec!["dom-events", "key-events", "gestures"]);
    assert_eq!(events.plugin_for("click").unwrap().name(), "dom-events");
    assert_eq!(events.plugin_for("keydown.enter").unwrap().name(), "key-events");
    assert_eq!(events.plugin_for("swipeleft").unwrap().name(), "gestures");

    let err = events.plugin_for("teleport").err().unwrap();
    assert!(matches!(err, Error::NoPluginForEvent { ref event } if event == "teleport"));
}

#[test]
fn test_key_listener_filters_through_renderer() {
    let (_, app) = boot(&test_config(&[]));
    let renderer = app
        .get(&*ROOT_RENDERER)
        .unwrap()
        .render_component(&ComponentType::new("search-box", Vec::new()));
    let input = renderer.create_element("input");
    let (hits, handler) = counting_handler();

    renderer.listen(&input, "keydown.control.enter", handler).unwrap();
    input.dispatch(&Event::key("keydown", "Enter"));
    input.dispatch(&Event::key("keydown", "Enter").with_modifier("shift"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    input.dispatch(&Event::key("keydown", "Enter").with_modifier("control"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_component_styles_land_in_document_head_once() {
    let (_, app) = boot(&test_config(&[]));
    let root = app.get(&*ROOT_RENDERER).unwrap();
    let component = ComponentType::new("card", vec![".card { margin: 0 }".to_string()]);

    let first = root.render_component(&component);
    let second = root.render_component(&component);
    assert!(Arc::ptr_eq(&first, &second));

    let head = app.get(&*DOCUMENT).unwrap().head().clone();
    assert_eq!(head.styles(), vec![".card { margin: 0 }".to_string()]);
    assert_eq!(
        app.get(&*SHARED_STYLES_HOST).unwrap().styles(),
        app.get(&*DOM_SHARED_STYLES_HOST).unwrap().styles()
    );
}

#[test]
fn test_animation_driver_follows_environment() {
    let (_, animated) = boot(&animated_config());
    assert_eq!(animated.get(&*ANIMATION_DRIVER).unwrap().name(), WEB_ANIMATIONS_TAG);

    let (_, plain) = boot(&test_config(&[]));
    assert_eq!(plain.get(&*ANIMATION_DRIVER).unwrap().name(), NOOP_CAPABILITY_TAG);
}

#[test]
fn test_exception_handler_uses_adapter() {
    let (_, app) = boot(&test_config(&[]));
    let handler = app.get(&*EXCEPTION_HANDLER).unwrap();
    handler.call(&Error::configuration("widget is missing"), Some("bootstrap"));
    assert_eq!(handler.handled_count(), 1);
}

#[test]
fn test_element_probe_wraps_root_renderer() {
    let config = test_config(&[]);
    let platform = create_browser_platform(&config).unwrap();
    let app = bootstrap_module(&platform, &debug_policy()).unwrap();

    let root = app.get(&*ROOT_RENDERER).unwrap();
    let debug = app.get(&*DEBUG_ROOT_RENDERER).unwrap();
    assert_eq!(service_address(&root), service_address(&debug));

    root.render_component(&ComponentType::new("first", Vec::new()));
    root.render_component(&ComponentType::new("second", Vec::new()));
    assert_eq!(debug.rendered_components(), vec!["first", "second"]);
}

#[test]
fn test_two_applications_share_one_platform() {
    let config = test_config(&[]);
    let platform = create_browser_platform(&config).unwrap();
    let first = bootstrap_module(&platform, &config.composition).unwrap();
    let second = bootstrap_module(&platform, &config.composition).unwrap();

    assert!(!Arc::ptr_eq(
        &first.get(&*EVENT_MANAGER).unwrap(),
        &second.get(&*EVENT_MANAGER).unwrap()
    ));
    assert!(Arc::ptr_eq(
        &first.get(&*TESTABILITY_REGISTRY).unwrap(),
        &second.get(&*TESTABILITY_REGISTRY).unwrap()
    ));
}
