//! Element probe unit
//!
//! Installed in debug mode after [`BrowserModule`](super::BrowserModule): it
//! replaces `RootRenderer` with a [`DebugRootRenderer`] wrapping the DOM root
//! renderer.

use plinth_domain::ports::CompositionUnit;
use plinth_domain::value_objects::Binding;

use crate::constants::ELEMENT_PROBE_UNIT_NAME;
use crate::dom::DebugRootRenderer;
use crate::tokens::{DEBUG_ROOT_RENDERER, ROOT_RENDERER};

#[derive(Debug, Default, Clone, Copy)]
pub struct ElementProbeUnit;

impl CompositionUnit for ElementProbeUnit {
    fn name(&self) -> &'static str {
        ELEMENT_PROBE_UNIT_NAME
    }

    fn bindings(&self) -> Vec<Binding> {
        vec![
            DEBUG_ROOT_RENDERER.use_class::<DebugRootRenderer>(|renderer| renderer),
            ROOT_RENDERER.use_existing_as(&*DEBUG_ROOT_RENDERER, |renderer| renderer),
        ]
    }
}
