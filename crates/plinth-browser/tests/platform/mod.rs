//! Browser Platform Tests
//!
//! Platform boot, application services and override policy, exercised
//! through the public factories.

mod application_tests;
mod boot_tests;
mod override_tests;

use std::sync::Arc;

use plinth_browser::constants::WEB_ANIMATIONS_FEATURE;
use plinth_browser::platforms::{bootstrap_module, create_browser_platform};
use plinth_domain::value_objects::EnvironmentSnapshot;
use plinth_infrastructure::config::{AppConfig, CompositionConfig};
use plinth_infrastructure::di::PlatformContext;

pub const TEST_URL: &str = "https://example.test/app?tab=1#top";

pub fn test_config(features: &[&str]) -> AppConfig {
    let environment = features.iter().fold(
        EnvironmentSnapshot::new("browser")
            .with_url(TEST_URL)
            .with_title("Plinth"),
        |env, feature| env.with_feature(*feature),
    );
    AppConfig {
        environment,
        ..Default::default()
    }
}

pub fn animated_config() -> AppConfig {
    test_config(&[WEB_ANIMATIONS_FEATURE])
}

pub fn boot(config: &AppConfig) -> (Arc<PlatformContext>, Arc<PlatformContext>) {
    let platform = create_browser_platform(config).unwrap();
    let app = bootstrap_module(&platform, &config.composition).unwrap();
    (platform, app)
}

pub fn debug_policy() -> CompositionConfig {
    CompositionConfig {
        debug_probe: true,
        ..Default::default()
    }
}
