//! Minimal element model
//!
//! Elements carry event listeners and appended style nodes; nothing more is
//! needed by the platform services that sit on top of them.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// Event delivered to element listeners
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    /// DOM event name (e.g. `keydown`)
    pub name: String,
    /// Key value for keyboard events
    pub key: Option<String>,
    /// Active modifier keys (`alt`, `control`, `meta`, `shift`)
    pub modifiers: BTreeSet<String>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Keyboard event carrying a key value
    pub fn key(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: Some(key.into()),
            modifiers: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.insert(modifier.into());
        self
    }
}

/// Listener callback
pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Handle returned when a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

static NEXT_LISTENER: AtomicU64 = AtomicU64::new(1);

struct Listener {
    id: ListenerId,
    event: String,
    handler: EventHandler,
}

/// A node that accepts listeners and style children
pub struct Element {
    tag: String,
    listeners: Mutex<Vec<Listener>>,
    styles: Mutex<Vec<String>>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            listeners: Mutex::new(Vec::new()),
            styles: Mutex::new(Vec::new()),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attach a listener for a DOM event name
    pub fn add_listener(&self, event: impl Into<String>, handler: EventHandler) -> ListenerId {
        let id = ListenerId(NEXT_LISTENER.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push(Listener {
            id,
            event: event.into(),
            handler,
        });
        id
    }

    /// Detach a listener; `false` when it was already gone
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|listener| listener.id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Deliver an event to every listener registered for its name
    ///
    /// Returns the number of listeners invoked.
    pub fn dispatch(&self, event: &Event) -> usize {
        // Handlers may attach listeners, so call them outside the lock
        let handlers: Vec<EventHandler> = self
            .listeners
            .lock()
            .iter()
            .filter(|listener| listener.event == event.name)
            .map(|listener| listener.handler.clone())
            .collect();
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    /// Append a `<style>` child with the given text
    pub fn append_style(&self, css: impl Into<String>) {
        self.styles.lock().push(css.into());
    }

    /// Style children in insertion order
    pub fn styles(&self) -> Vec<String> {
        self.styles.lock().clone()
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("listeners", &self.listener_count())
            .field("styles", &self.styles.lock().len())
            .finish()
    }
}
