//! Standard DOM events

use std::sync::Arc;

use plinth_domain::error::Result;
use plinth_domain::value_objects::{Deps, Injectable};

use super::plugin::EventManagerPlugin;
use crate::constants::DOM_EVENT_NAMES;
use crate::dom::{Element, EventHandler, ListenerId};

/// Attaches listeners for standard DOM event names as-is
#[derive(Debug, Default)]
pub struct DomEventsPlugin;

impl EventManagerPlugin for DomEventsPlugin {
    fn name(&self) -> &'static str {
        "dom-events"
    }

    fn supports(&self, event_name: &str) -> bool {
        DOM_EVENT_NAMES.contains(&event_name)
    }

    fn add_event_listener(
        &self,
        element: &Arc<Element>,
        event_name: &str,
        handler: EventHandler,
    ) -> Result<ListenerId> {
        Ok(element.add_listener(event_name, handler))
    }
}

impl Injectable for DomEventsPlugin {
    fn construct(_deps: &Deps) -> Result<Self> {
        Ok(Self)
    }
}
