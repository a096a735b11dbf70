//! Internal browser platform unit
//!
//! Declares the platform initializers. Their order matters: the DOM adapter
//! is installed before testability is initialised.

use std::sync::Arc;

use plinth_domain::ports::{CompositionUnit, InitializerAction};
use plinth_domain::tokens::{ENVIRONMENT, PLATFORM_INITIALIZER};
use plinth_domain::value_objects::{Binding, Dependency, EnvironmentSnapshot};

use crate::constants::{BROWSER_PLATFORM_NAME, BROWSER_PLATFORM_UNIT_NAME};
use crate::dom::InstallDomAdapter;
use crate::location::BrowserPlatformLocation;
use crate::testability::BrowserGetTestability;
use crate::tokens::{ADAPTER_SLOT, PLATFORM_LOCATION, TESTABILITY_REGISTRY};

/// Platform-level browser bindings
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserPlatformUnit;

impl CompositionUnit for BrowserPlatformUnit {
    fn name(&self) -> &'static str {
        BROWSER_PLATFORM_UNIT_NAME
    }

    fn bindings(&self) -> Vec<Binding> {
        vec![
            ENVIRONMENT.use_value(Arc::new(EnvironmentSnapshot::new(BROWSER_PLATFORM_NAME))),
            PLATFORM_INITIALIZER
                .use_factory(
                    vec![Dependency::one(&*ENVIRONMENT), Dependency::one(&*ADAPTER_SLOT)],
                    |deps| {
                        let action: Arc<dyn InitializerAction> = Arc::new(InstallDomAdapter::new(
                            deps.get(&*ENVIRONMENT)?,
                            deps.get(&*ADAPTER_SLOT)?,
                        ));
                        Ok(action)
                    },
                )
                .multi(),
            PLATFORM_INITIALIZER
                .use_factory(vec![Dependency::one(&*TESTABILITY_REGISTRY)], |deps| {
                    let action: Arc<dyn InitializerAction> =
                        Arc::new(BrowserGetTestability::new(deps.get(&*TESTABILITY_REGISTRY)?));
                    Ok(action)
                })
                .multi(),
            PLATFORM_LOCATION.use_class::<BrowserPlatformLocation>(|location| location),
        ]
    }
}
