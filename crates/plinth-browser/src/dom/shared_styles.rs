//! Shared styles host
//!
//! Component styles are added once per context, de-duplicated and kept in
//! first-added order. Every host element receives each style exactly once,
//! including hosts added after the styles.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use plinth_domain::error::Result;
use plinth_domain::value_objects::{Dependency, Deps, Injectable};
use tracing::debug;

use super::document::Document;
use super::element::Element;
use crate::tokens::DOCUMENT;

/// Registry of styles shared by every rendered component
pub trait SharedStylesHost: Send + Sync {
    /// Add styles, ignoring those already present
    fn add_styles(&self, styles: &[String]);

    /// Every style added so far, in first-added order
    fn styles(&self) -> Vec<String>;
}

#[derive(Default)]
struct HostState {
    styles: Vec<String>,
    seen: HashSet<String>,
    hosts: Vec<Arc<Element>>,
}

/// Shared styles host writing `<style>` nodes into host elements
pub struct DomSharedStylesHost {
    state: Mutex<HostState>,
}

impl DomSharedStylesHost {
    /// Host seeded with the document head
    pub fn new(document: &Document) -> Self {
        let host = Self {
            state: Mutex::new(HostState::default()),
        };
        host.add_host(document.head().clone());
        host
    }

    /// Add a host element and replay every known style onto it
    pub fn add_host(&self, host: Arc<Element>) {
        let mut state = self.state.lock();
        for style in &state.styles {
            host.append_style(style.clone());
        }
        state.hosts.push(host);
    }

    /// Stop writing styles into a host
    pub fn remove_host(&self, host: &Arc<Element>) {
        self.state
            .lock()
            .hosts
            .retain(|known| !Arc::ptr_eq(known, host));
    }

    pub fn host_count(&self) -> usize {
        self.state.lock().hosts.len()
    }
}

impl SharedStylesHost for DomSharedStylesHost {
    fn add_styles(&self, styles: &[String]) {
        let mut state = self.state.lock();
        let mut added = 0;
        for style in styles {
            if !state.seen.insert(style.clone()) {
                continue;
            }
            state.styles.push(style.clone());
            for host in &state.hosts {
                host.append_style(style.clone());
            }
            added += 1;
        }
        debug!(added, total = state.styles.len(), "Shared styles updated");
    }

    fn styles(&self) -> Vec<String> {
        self.state.lock().styles.clone()
    }
}

impl Injectable for DomSharedStylesHost {
    fn dependencies() -> Vec<Dependency> {
        vec![Dependency::one(&*DOCUMENT)]
    }

    fn construct(deps: &Deps) -> Result<Self> {
        Ok(Self::new(deps.get(&*DOCUMENT)?.as_ref()))
    }
}
