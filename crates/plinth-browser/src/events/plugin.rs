//! Event manager plugin port

use std::sync::Arc;

use plinth_domain::error::Result;

use crate::dom::{Element, EventHandler, ListenerId};

/// Handles the events it claims on behalf of the [`EventManager`](super::EventManager)
pub trait EventManagerPlugin: Send + Sync {
    /// Plugin name for diagnostics
    fn name(&self) -> &'static str;

    /// Whether this plugin handles the event name
    fn supports(&self, event_name: &str) -> bool;

    /// Attach a listener for a supported event
    fn add_event_listener(
        &self,
        element: &Arc<Element>,
        event_name: &str,
        handler: EventHandler,
    ) -> Result<ListenerId>;
}
