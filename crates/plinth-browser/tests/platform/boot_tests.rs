//! Platform creation and initializers

use plinth_browser::constants::{
    BROWSER_PLATFORM_NAME, BROWSER_PLATFORM_UNIT_NAME, CORE_UNIT_NAME, INIT_TESTABILITY,
    INSTALL_DOM_ADAPTER,
};
use plinth_browser::platforms::{create_browser_platform, platform_browser, platform_core};
use plinth_browser::tokens::{ADAPTER_SLOT, PLATFORM_LOCATION, TESTABILITY_REGISTRY};
use plinth_domain::constants::{CORE_PLATFORM_NAME, EXTRA_ORIGIN};
use plinth_domain::tokens::{ENVIRONMENT, PLATFORM_NAME};
use plinth_domain::value_objects::PlatformState;

use super::{TEST_URL, animated_config, test_config};

#[test]
fn test_browser_platform_extends_core() {
    let browser = platform_browser();
    assert_eq!(browser.name(), BROWSER_PLATFORM_NAME);
    assert_eq!(browser.parent().map(|parent| parent.name()), Some(CORE_PLATFORM_NAME));

    let units: Vec<&str> = browser.units().iter().map(|unit| unit.name()).collect();
    assert_eq!(units, vec![CORE_UNIT_NAME, BROWSER_PLATFORM_UNIT_NAME]);
}

#[test]
fn test_initializers_run_in_declaration_order() {
    let platform = create_browser_platform(&animated_config()).unwrap();

    assert_eq!(platform.state(), PlatformState::Ready);
    assert_eq!(
        platform.initialized_actions(),
        &[INSTALL_DOM_ADAPTER.to_string(), INIT_TESTABILITY.to_string()]
    );
    assert!(platform.get(&*ADAPTER_SLOT).unwrap().is_installed());
    assert!(platform.get(&*TESTABILITY_REGISTRY).unwrap().getter_installed());
}

#[test]
fn test_platform_name_is_the_leaf_factory() {
    let platform = create_browser_platform(&test_config(&[])).unwrap();
    assert_eq!(platform.get(&*PLATFORM_NAME).unwrap().as_str(), BROWSER_PLATFORM_NAME);
}

#[test]
fn test_configured_environment_replaces_default() {
    let platform = create_browser_platform(&test_config(&[])).unwrap();

    assert_eq!(platform.get(&*ENVIRONMENT).unwrap().url, TEST_URL);
    let replaced = platform
        .registry()
        .overrides()
        .iter()
        .find(|record| record.identity == ENVIRONMENT.identity().name())
        .cloned()
        .unwrap();
    assert_eq!(replaced.replaced_origin, BROWSER_PLATFORM_UNIT_NAME);
    assert_eq!(replaced.origin, EXTRA_ORIGIN);
    assert!(!replaced.is_untrusted());
}

#[test]
fn test_platform_location_reads_environment_url() {
    let platform = create_browser_platform(&test_config(&[])).unwrap();
    let location = platform.get(&*PLATFORM_LOCATION).unwrap();

    assert_eq!(location.pathname(), "/app");
    assert_eq!(location.search(), "?tab=1");
    assert_eq!(location.hash(), "#top");
}

#[test]
fn test_core_platform_has_no_initializers() {
    let core = platform_core().create(Vec::new()).unwrap();
    assert!(core.initialized_actions().is_empty());
    assert!(!core.get(&*ADAPTER_SLOT).unwrap().is_installed());
}

#[test]
fn test_eager_platform_constructs_singletons_up_front() {
    let lazy = create_browser_platform(&test_config(&[])).unwrap();

    let mut config = test_config(&[]);
    config.composition.eager = true;
    let eager = create_browser_platform(&config).unwrap();

    assert!(eager.cached_count() > lazy.cached_count());
}
