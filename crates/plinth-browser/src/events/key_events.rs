//! Key events
//!
//! Handles names such as `keydown.enter` or `keyup.control.shift.a`: a DOM
//! key event, optional modifiers and exactly one key. The listener fires only
//! when the pressed key and the active modifiers match exactly.

use std::collections::BTreeSet;
use std::sync::Arc;

use plinth_domain::error::{Error, Result};
use plinth_domain::value_objects::{Deps, Injectable};

use super::plugin::EventManagerPlugin;
use crate::constants::KEY_MODIFIERS;
use crate::dom::{Element, Event, EventHandler, ListenerId};

/// Parsed key event name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEventSpec {
    /// Underlying DOM event (`keydown` or `keyup`)
    pub dom_event: String,
    /// Normalized key
    pub key: String,
    /// Required modifiers
    pub modifiers: BTreeSet<String>,
}

impl KeyEventSpec {
    /// Parse a key event name, `None` when it is not one
    pub fn parse(event_name: &str) -> Option<Self> {
        let lowered = event_name.to_lowercase();
        let mut parts: Vec<&str> = lowered.split('.').collect();
        let dom_event = parts.first().copied()?;
        if dom_event != "keydown" && dom_event != "keyup" {
            return None;
        }
        parts.remove(0);

        let key = normalize_key(parts.pop()?);
        let mut modifiers = BTreeSet::new();
        for modifier in KEY_MODIFIERS {
            if let Some(at) = parts.iter().position(|part| part == modifier) {
                parts.remove(at);
                modifiers.insert((*modifier).to_string());
            }
        }
        if !parts.is_empty() || key.is_empty() {
            return None;
        }

        Some(Self {
            dom_event: dom_event.to_string(),
            key,
            modifiers,
        })
    }

    /// Whether a delivered event matches this spec
    pub fn matches(&self, event: &Event) -> bool {
        let Some(key) = event.key.as_deref() else {
            return false;
        };
        event.name == self.dom_event && event_key(key) == self.key && event.modifiers == self.modifiers
    }
}

fn normalize_key(key: &str) -> String {
    match key {
        "esc" => "escape".to_string(),
        other => other.to_string(),
    }
}

fn event_key(key: &str) -> String {
    match key {
        " " => "space".to_string(),
        "." => "dot".to_string(),
        other => other.to_lowercase(),
    }
}

/// Filters key events by key and modifiers
#[derive(Debug, Default)]
pub struct KeyEventsPlugin;

impl EventManagerPlugin for KeyEventsPlugin {
    fn name(&self) -> &'static str {
        "key-events"
    }

    fn supports(&self, event_name: &str) -> bool {
        KeyEventSpec::parse(event_name).is_some()
    }

    fn add_event_listener(
        &self,
        element: &Arc<Element>,
        event_name: &str,
        handler: EventHandler,
    ) -> Result<ListenerId> {
        let spec = KeyEventSpec::parse(event_name).ok_or_else(|| Error::NoPluginForEvent {
            event: event_name.to_string(),
        })?;
        let dom_event = spec.dom_event.clone();
        Ok(element.add_listener(
            dom_event,
            Arc::new(move |event: &Event| {
                if spec.matches(event) {
                    handler(event);
                }
            }),
        ))
    }
}

impl Injectable for KeyEventsPlugin {
    fn construct(_deps: &Deps) -> Result<Self> {
        Ok(Self)
    }
}
