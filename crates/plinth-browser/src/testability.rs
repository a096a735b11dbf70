//! Testability
//!
//! [`Testability`] tracks outstanding work of one application so test
//! drivers can wait for it to become stable. The platform-level
//! [`TestabilityRegistry`] maps application root elements to their
//! testability; the `init-testability` platform initializer publishes the
//! registry's getter.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};
use plinth_domain::error::{Error, Result};
use plinth_domain::ports::InitializerAction;
use plinth_domain::value_objects::{Deps, Injectable};
use tracing::info;

use crate::constants::INIT_TESTABILITY;
use crate::dom::Element;

type StableCallback = Box<dyn FnOnce() + Send>;

/// Pending-work tracker for one application
#[derive(Default)]
pub struct Testability {
    pending: AtomicUsize,
    callbacks: Mutex<Vec<StableCallback>>,
}

impl Testability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new outstanding request; returns the new count
    pub fn increase_pending_request_count(&self) -> usize {
        self.pending.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Record a finished request; returns the new count
    ///
    /// Reaching zero runs every queued `when_stable` callback.
    pub fn decrease_pending_request_count(&self) -> Result<usize> {
        let remaining = self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| count.checked_sub(1))
            .map(|previous| previous - 1)
            .map_err(|_| Error::infrastructure("pending request count is already zero"))?;
        if remaining == 0 {
            self.run_callbacks();
        }
        Ok(remaining)
    }

    pub fn pending_request_count(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn is_stable(&self) -> bool {
        self.pending_request_count() == 0
    }

    /// Run `callback` once no requests are pending
    pub fn when_stable(&self, callback: impl FnOnce() + Send + 'static) {
        self.callbacks.lock().push(Box::new(callback));
        if self.is_stable() {
            self.run_callbacks();
        }
    }

    fn run_callbacks(&self) {
        let callbacks: Vec<StableCallback> = std::mem::take(&mut *self.callbacks.lock());
        for callback in callbacks {
            callback();
        }
    }
}

impl Injectable for Testability {
    fn construct(_deps: &Deps) -> Result<Self> {
        Ok(Self::new())
    }
}

impl std::fmt::Debug for Testability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Testability")
            .field("pending", &self.pending_request_count())
            .finish()
    }
}

/// Platform-wide map of application roots to their testability
#[derive(Default)]
pub struct TestabilityRegistry {
    applications: RwLock<Vec<(Arc<Element>, Arc<Testability>)>>,
    getter_installed: AtomicBool,
}

impl TestabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_application(&self, root: Arc<Element>, testability: Arc<Testability>) {
        self.applications.write().push((root, testability));
    }

    /// Testability registered for a root element
    pub fn get_testability(&self, root: &Arc<Element>) -> Option<Arc<Testability>> {
        self.applications
            .read()
            .iter()
            .find(|(known, _)| Arc::ptr_eq(known, root))
            .map(|(_, testability)| testability.clone())
    }

    pub fn all_testabilities(&self) -> Vec<Arc<Testability>> {
        self.applications
            .read()
            .iter()
            .map(|(_, testability)| testability.clone())
            .collect()
    }

    /// Publish the testability getter for test drivers
    pub fn install_getter(&self) {
        self.getter_installed.store(true, Ordering::SeqCst);
    }

    pub fn getter_installed(&self) -> bool {
        self.getter_installed.load(Ordering::SeqCst)
    }
}

impl Injectable for TestabilityRegistry {
    fn construct(_deps: &Deps) -> Result<Self> {
        Ok(Self::new())
    }
}

impl std::fmt::Debug for TestabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestabilityRegistry")
            .field("applications", &self.applications.read().len())
            .field("getter_installed", &self.getter_installed())
            .finish()
    }
}

/// Platform initializer publishing the testability getter
pub struct BrowserGetTestability {
    registry: Arc<TestabilityRegistry>,
}

impl BrowserGetTestability {
    pub fn new(registry: Arc<TestabilityRegistry>) -> Self {
        Self { registry }
    }
}

impl InitializerAction for BrowserGetTestability {
    fn name(&self) -> &str {
        INIT_TESTABILITY
    }

    fn run(&self) -> Result<()> {
        self.registry.install_getter();
        info!("Testability getter installed");
        Ok(())
    }
}
