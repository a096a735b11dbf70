//! Event manager
//!
//! Routes each listener registration to the first plugin, in registration
//! order, whose `supports` claims the event name. The chosen plugin is cached
//! per event name.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use plinth_domain::error::{Error, Result};
use plinth_domain::value_objects::{Dependency, Deps, Injectable};
use tracing::debug;

use super::plugin::EventManagerPlugin;
use crate::dom::{Element, EventHandler, ListenerId};
use crate::tokens::EVENT_MANAGER_PLUGINS;

/// Dispatches listener registrations to event plugins
pub struct EventManager {
    plugins: Vec<Arc<dyn EventManagerPlugin>>,
    lookup: Mutex<HashMap<String, usize>>,
}

impl EventManager {
    pub fn new(plugins: Vec<Arc<dyn EventManagerPlugin>>) -> Self {
        Self {
            plugins,
            lookup: Mutex::new(HashMap::new()),
        }
    }

    /// Plugin names in the order they are asked
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    /// The plugin handling an event name
    pub fn plugin_for(&self, event_name: &str) -> Result<Arc<dyn EventManagerPlugin>> {
        let mut lookup = self.lookup.lock();
        if let Some(&at) = lookup.get(event_name) {
            return Ok(self.plugins[at].clone());
        }

        let at = self
            .plugins
            .iter()
            .position(|plugin| plugin.supports(event_name))
            .ok_or_else(|| Error::NoPluginForEvent {
                event: event_name.to_string(),
            })?;
        debug!(event = event_name, plugin = self.plugins[at].name(), "Event plugin chosen");
        lookup.insert(event_name.to_string(), at);
        Ok(self.plugins[at].clone())
    }

    /// Attach a listener through the plugin claiming the event
    pub fn add_event_listener(
        &self,
        element: &Arc<Element>,
        event_name: &str,
        handler: EventHandler,
    ) -> Result<ListenerId> {
        self.plugin_for(event_name)?
            .add_event_listener(element, event_name, handler)
    }
}

impl Injectable for EventManager {
    fn dependencies() -> Vec<Dependency> {
        vec![Dependency::all(&*EVENT_MANAGER_PLUGINS)]
    }

    fn construct(deps: &Deps) -> Result<Self> {
        Ok(Self::new(deps.get_all(&*EVENT_MANAGER_PLUGINS)?))
    }
}
