//! Core platform unit

use std::sync::Arc;

use plinth_domain::ports::CompositionUnit;
use plinth_domain::value_objects::Binding;

use crate::constants::CORE_UNIT_NAME;
use crate::dom::AdapterSlot;
use crate::testability::TestabilityRegistry;
use crate::tokens::{ADAPTER_SLOT, TESTABILITY_REGISTRY};

/// Bindings every platform carries
#[derive(Debug, Default, Clone, Copy)]
pub struct CoreUnit;

impl CompositionUnit for CoreUnit {
    fn name(&self) -> &'static str {
        CORE_UNIT_NAME
    }

    fn bindings(&self) -> Vec<Binding> {
        vec![
            TESTABILITY_REGISTRY.use_class::<TestabilityRegistry>(|registry| registry),
            ADAPTER_SLOT.use_factory(Vec::new(), |_| Ok(Arc::new(AdapterSlot::new()))),
        ]
    }
}
