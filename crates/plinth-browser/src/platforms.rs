//! Browser platform factories and application bootstrap
//!
//! ```text
//! platform_core()    = [CoreUnit]
//! platform_browser() = platform_core() + [BrowserPlatformUnit]
//!
//! create_browser_platform(config) ─► platform context (Ready)
//!                                        │ parent
//! bootstrap_module(platform, policy) ─► application context
//!                                        [BrowserModule, ElementProbeUnit?]
//! ```

use std::sync::Arc;

use plinth_domain::constants::{CORE_PLATFORM_NAME, EXTRA_ORIGIN};
use plinth_domain::error::Result;
use plinth_domain::ports::CompositionUnit;
use plinth_domain::tokens::ENVIRONMENT;
use plinth_infrastructure::config::{AppConfig, CompositionConfig};
use plinth_infrastructure::constants::APPLICATION_CONTEXT_NAME;
use plinth_infrastructure::di::{ContextBuilder, PlatformContext, PlatformFactory};
use tracing::info;

use crate::constants::BROWSER_PLATFORM_NAME;
use crate::tokens::{DOCUMENT, TESTABILITY, TESTABILITY_REGISTRY};
use crate::units::{BrowserModule, BrowserPlatformUnit, CoreUnit, ElementProbeUnit};

/// The root platform
pub fn platform_core() -> PlatformFactory {
    let units: Vec<Arc<dyn CompositionUnit>> = vec![Arc::new(CoreUnit)];
    PlatformFactory::new(CORE_PLATFORM_NAME, units)
}

/// The browser platform, extending [`platform_core`]
pub fn platform_browser() -> PlatformFactory {
    let units: Vec<Arc<dyn CompositionUnit>> = vec![Arc::new(BrowserPlatformUnit)];
    platform_core().extend(BROWSER_PLATFORM_NAME, units)
}

/// Compose and initialize the browser platform for a configuration
///
/// The configured environment replaces the platform's default snapshot.
pub fn create_browser_platform(config: &AppConfig) -> Result<Arc<PlatformContext>> {
    let environment = ENVIRONMENT
        .use_value(Arc::new(config.environment.clone()))
        .with_origin(EXTRA_ORIGIN);
    let context = platform_browser()
        .builder()
        .with_composition(&config.composition)
        .with_binding(environment)
        .build()?;
    info!(
        platform = context.name(),
        url = %config.environment.url,
        initializers = ?context.initialized_actions(),
        "Browser platform ready"
    );
    Ok(Arc::new(context))
}

/// Compose the application context on top of a ready platform
///
/// Adds the element probe when `policy.debug_probe` is set, and registers
/// the application's testability for the document body.
pub fn bootstrap_module(
    platform: &Arc<PlatformContext>,
    policy: &CompositionConfig,
) -> Result<Arc<PlatformContext>> {
    let app = application_builder(platform, policy).build()?;

    let document = app.get(&*DOCUMENT)?;
    let testability = app.get(&*TESTABILITY)?;
    app.get(&*TESTABILITY_REGISTRY)?
        .register_application(document.body().clone(), testability);

    info!(
        context = app.name(),
        platform = platform.name(),
        debug_probe = policy.debug_probe,
        "Application bootstrapped"
    );
    Ok(Arc::new(app))
}

/// Builder for the application context, before any caller additions
pub fn application_builder(
    platform: &Arc<PlatformContext>,
    policy: &CompositionConfig,
) -> ContextBuilder {
    let builder = ContextBuilder::new(APPLICATION_CONTEXT_NAME)
        .with_parent(platform.clone())
        .with_composition(policy)
        .with_unit(&BrowserModule);
    if policy.debug_probe {
        builder.with_unit(&ElementProbeUnit)
    } else {
        builder
    }
}
