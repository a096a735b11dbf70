//! Testability tracking

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use plinth_browser::testability::{BrowserGetTestability, Testability, TestabilityRegistry};
use plinth_domain::ports::InitializerAction;

#[test]
fn test_callbacks_run_immediately_when_stable() {
    let testability = Testability::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    testability.when_stable(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_callbacks_wait_for_every_request() {
    let testability = Testability::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    testability.increase_pending_request_count();
    testability.increase_pending_request_count();
    testability.when_stable(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    testability.decrease_pending_request_count().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    testability.decrease_pending_request_count().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(testability.is_stable());
}

#[test]
fn test_initializer_installs_getter() {
    let registry = Arc::new(TestabilityRegistry::new());
    let init = BrowserGetTestability::new(registry.clone());

    assert!(!registry.getter_installed());
    init.run().unwrap();
    assert!(registry.getter_installed());
}
