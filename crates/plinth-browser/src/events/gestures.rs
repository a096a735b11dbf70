//! Gesture events

use std::collections::BTreeSet;
use std::sync::Arc;

use plinth_domain::error::Result;
use plinth_domain::value_objects::{Dependency, Deps, Injectable};

use super::plugin::EventManagerPlugin;
use crate::constants::GESTURE_EVENT_NAMES;
use crate::dom::{Element, EventHandler, ListenerId};
use crate::tokens::GESTURE_CONFIG;

/// Gesture event names the gestures plugin recognises
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureConfig {
    events: BTreeSet<String>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            events: GESTURE_EVENT_NAMES.iter().map(|name| (*name).to_string()).collect(),
        }
    }
}

impl GestureConfig {
    /// Recognise an additional gesture name
    #[must_use]
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.events.insert(event.into().to_lowercase());
        self
    }

    pub fn is_gesture(&self, event_name: &str) -> bool {
        self.events.contains(&event_name.to_lowercase())
    }

    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }
}

impl Injectable for GestureConfig {
    fn construct(_deps: &Deps) -> Result<Self> {
        Ok(Self::default())
    }
}

/// Attaches listeners for configured gesture names
#[derive(Debug)]
pub struct GesturesPlugin {
    config: Arc<GestureConfig>,
}

impl GesturesPlugin {
    pub fn new(config: Arc<GestureConfig>) -> Self {
        Self { config }
    }
}

impl EventManagerPlugin for GesturesPlugin {
    fn name(&self) -> &'static str {
        "gestures"
    }

    fn supports(&self, event_name: &str) -> bool {
        self.config.is_gesture(event_name)
    }

    fn add_event_listener(
        &self,
        element: &Arc<Element>,
        event_name: &str,
        handler: EventHandler,
    ) -> Result<ListenerId> {
        Ok(element.add_listener(event_name.to_lowercase(), handler))
    }
}

impl Injectable for GesturesPlugin {
    fn dependencies() -> Vec<Dependency> {
        vec![Dependency::one(&*GESTURE_CONFIG)]
    }

    fn construct(deps: &Deps) -> Result<Self> {
        Ok(Self::new(deps.get(&*GESTURE_CONFIG)?))
    }
}
