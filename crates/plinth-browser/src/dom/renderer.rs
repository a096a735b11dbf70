//! Root renderers
//!
//! A root renderer hands out one [`DomRenderer`] per component type. The
//! first render of a component registers its styles with the shared styles
//! host. [`DebugRootRenderer`] wraps another root renderer and records every
//! component rendered through it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use plinth_domain::error::Result;
use plinth_domain::value_objects::{Dependency, Deps, Injectable};
use tracing::debug;

use super::document::Document;
use super::element::{Element, EventHandler, ListenerId};
use super::shared_styles::SharedStylesHost;
use crate::animation::{AnimationDriver, AnimationPlayer, Keyframe};
use crate::events::EventManager;
use crate::tokens::{ANIMATION_DRIVER, DOCUMENT, DOM_ROOT_RENDERER, EVENT_MANAGER, SHARED_STYLES_HOST};

/// Static description of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentType {
    /// Unique component id
    pub id: String,
    /// Styles the component needs in the document
    pub styles: Vec<String>,
}

impl ComponentType {
    pub fn new(id: impl Into<String>, styles: Vec<String>) -> Self {
        Self {
            id: id.into(),
            styles,
        }
    }
}

/// Entry point to rendering
pub trait RootRenderer: Send + Sync {
    /// Renderer for a component type, created on first use
    fn render_component(&self, component: &ComponentType) -> Arc<DomRenderer>;
}

/// Renderer for one component type
pub struct DomRenderer {
    component_id: String,
    document: Arc<Document>,
    events: Arc<EventManager>,
    animations: Arc<dyn AnimationDriver>,
}

impl DomRenderer {
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    pub fn create_element(&self, tag: &str) -> Arc<Element> {
        self.document.create_element(tag)
    }

    /// Attach an event listener through the event manager plugins
    pub fn listen(
        &self,
        element: &Arc<Element>,
        event_name: &str,
        handler: EventHandler,
    ) -> Result<ListenerId> {
        self.events.add_event_listener(element, event_name, handler)
    }

    /// Start an animation through the selected driver
    pub fn animate(
        &self,
        element: &Element,
        keyframes: &[Keyframe],
        duration_ms: u64,
    ) -> Arc<dyn AnimationPlayer> {
        self.animations.animate(element, keyframes, duration_ms)
    }
}

/// Root renderer writing into the hosting document
pub struct DomRootRendererImpl {
    document: Arc<Document>,
    events: Arc<EventManager>,
    styles: Arc<dyn SharedStylesHost>,
    animations: Arc<dyn AnimationDriver>,
    registered: Mutex<HashMap<String, Arc<DomRenderer>>>,
}

impl DomRootRendererImpl {
    pub fn new(
        document: Arc<Document>,
        events: Arc<EventManager>,
        styles: Arc<dyn SharedStylesHost>,
        animations: Arc<dyn AnimationDriver>,
    ) -> Self {
        Self {
            document,
            events,
            styles,
            animations,
            registered: Mutex::new(HashMap::new()),
        }
    }
}

impl RootRenderer for DomRootRendererImpl {
    fn render_component(&self, component: &ComponentType) -> Arc<DomRenderer> {
        let mut registered = self.registered.lock();
        if let Some(renderer) = registered.get(&component.id) {
            return renderer.clone();
        }

        self.styles.add_styles(&component.styles);
        let renderer = Arc::new(DomRenderer {
            component_id: component.id.clone(),
            document: self.document.clone(),
            events: self.events.clone(),
            animations: self.animations.clone(),
        });
        registered.insert(component.id.clone(), renderer.clone());
        debug!(component = %component.id, "Component renderer created");
        renderer
    }
}

impl Injectable for DomRootRendererImpl {
    fn dependencies() -> Vec<Dependency> {
        vec![
            Dependency::one(&*DOCUMENT),
            Dependency::one(&*EVENT_MANAGER),
            Dependency::one(&*SHARED_STYLES_HOST),
            Dependency::one(&*ANIMATION_DRIVER),
        ]
    }

    fn construct(deps: &Deps) -> Result<Self> {
        Ok(Self::new(
            deps.get(&*DOCUMENT)?,
            deps.get(&*EVENT_MANAGER)?,
            deps.get(&*SHARED_STYLES_HOST)?,
            deps.get(&*ANIMATION_DRIVER)?,
        ))
    }
}

/// Root renderer that records rendered components for debugging tools
pub struct DebugRootRenderer {
    inner: Arc<dyn RootRenderer>,
    rendered: Mutex<Vec<String>>,
}

impl DebugRootRenderer {
    pub fn new(inner: Arc<dyn RootRenderer>) -> Self {
        Self {
            inner,
            rendered: Mutex::new(Vec::new()),
        }
    }

    /// Ids of the components rendered so far, in order
    pub fn rendered_components(&self) -> Vec<String> {
        self.rendered.lock().clone()
    }
}

impl RootRenderer for DebugRootRenderer {
    fn render_component(&self, component: &ComponentType) -> Arc<DomRenderer> {
        self.rendered.lock().push(component.id.clone());
        self.inner.render_component(component)
    }
}

impl Injectable for DebugRootRenderer {
    fn dependencies() -> Vec<Dependency> {
        vec![Dependency::one(&*DOM_ROOT_RENDERER)]
    }

    fn construct(deps: &Deps) -> Result<Self> {
        Ok(Self::new(deps.get(&*DOM_ROOT_RENDERER)?))
    }
}
