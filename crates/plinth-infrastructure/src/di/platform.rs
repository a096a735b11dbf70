//! Platform Factories
//!
//! A platform is a named list of composition units, optionally extending a
//! parent platform. Creating a platform context composes the ancestor units
//! first, then the platform's own, then any extra bindings supplied by the
//! caller, so later declarations override earlier ones.
//!
//! ```text
//! core      = [CoreUnit]
//! browser   = core + [BrowserPlatformUnit]
//! create()  = core units → browser units → extra bindings → initialize
//! ```

use std::sync::Arc;

use plinth_domain::constants::{EXTRA_ORIGIN, UNSPECIFIED_ORIGIN};
use plinth_domain::error::Result;
use plinth_domain::ports::CompositionUnit;
use plinth_domain::tokens::PLATFORM_NAME;
use plinth_domain::value_objects::Binding;
use tracing::info;

use super::context::{ContextBuilder, PlatformContext};

/// Named, inheritable recipe for a platform-level context
#[derive(Clone)]
pub struct PlatformFactory {
    name: &'static str,
    parent: Option<Arc<PlatformFactory>>,
    units: Vec<Arc<dyn CompositionUnit>>,
}

impl PlatformFactory {
    /// Root platform built from `units`
    pub fn new(name: &'static str, units: Vec<Arc<dyn CompositionUnit>>) -> Self {
        Self {
            name,
            parent: None,
            units,
        }
    }

    /// Platform extending `self` with additional units
    pub fn extend(&self, name: &'static str, units: Vec<Arc<dyn CompositionUnit>>) -> Self {
        Self {
            name,
            parent: Some(Arc::new(self.clone())),
            units,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parent(&self) -> Option<&PlatformFactory> {
        self.parent.as_deref()
    }

    /// Every unit in composition order, ancestors first
    pub fn units(&self) -> Vec<Arc<dyn CompositionUnit>> {
        let mut units = self
            .parent
            .as_ref()
            .map(|parent| parent.units())
            .unwrap_or_default();
        units.extend(self.units.iter().cloned());
        units
    }

    /// Builder pre-populated with the platform name and every unit
    pub fn builder(&self) -> ContextBuilder {
        let name_binding = PLATFORM_NAME
            .use_value(Arc::new(self.name.to_string()))
            .with_origin(self.name);
        self.units()
            .iter()
            .fold(ContextBuilder::new(self.name).with_binding(name_binding), |builder, unit| {
                builder.with_unit(unit.as_ref())
            })
    }

    /// Compose and initialize a platform context
    ///
    /// `extra` bindings are appended after every unit and therefore override
    /// them.
    pub fn create(&self, extra: Vec<Binding>) -> Result<PlatformContext> {
        info!(platform = self.name, extra = extra.len(), "Creating platform");
        self.builder()
            .with_bindings(extra.into_iter().map(tag_extra))
            .build()
    }
}

impl std::fmt::Debug for PlatformFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units: Vec<&'static str> = self.units().iter().map(|unit| unit.name()).collect();
        f.debug_struct("PlatformFactory")
            .field("name", &self.name)
            .field("units", &units)
            .finish()
    }
}

fn tag_extra(binding: Binding) -> Binding {
    if binding.origin() == UNSPECIFIED_ORIGIN {
        binding.with_origin(EXTRA_ORIGIN)
    } else {
        binding
    }
}
