//! DOM adapter
//!
//! The adapter is the platform's view of the hosting DOM. It is not available
//! until the platform's `install-dom-adapter` initializer has run; services
//! that need it read it from the per-platform [`AdapterSlot`] at
//! construction time.

use std::sync::Arc;

use parking_lot::RwLock;
use plinth_domain::error::{Error, Result};
use plinth_domain::ports::InitializerAction;
use plinth_domain::value_objects::EnvironmentSnapshot;
use tracing::{error, info};

use super::document::Document;
use crate::constants::{INSTALL_DOM_ADAPTER, WEB_ANIMATIONS_FEATURE};

/// Access to the hosting DOM
pub trait DomAdapter: Send + Sync {
    /// Adapter name for diagnostics
    fn name(&self) -> &str;

    /// The document applications render into
    fn default_doc(&self) -> Arc<Document>;

    /// Whether native web animations are available
    fn supports_web_animation(&self) -> bool;

    /// Report an error to the hosting console
    fn log_error(&self, message: &str);
}

/// Adapter over a browser environment snapshot
#[derive(Debug)]
pub struct BrowserDomAdapter {
    env: EnvironmentSnapshot,
    document: Arc<Document>,
}

impl BrowserDomAdapter {
    pub fn new(env: EnvironmentSnapshot) -> Self {
        let document = Arc::new(Document::from_environment(&env));
        Self { env, document }
    }
}

impl DomAdapter for BrowserDomAdapter {
    fn name(&self) -> &str {
        "browser"
    }

    fn default_doc(&self) -> Arc<Document> {
        self.document.clone()
    }

    fn supports_web_animation(&self) -> bool {
        self.env.supports(WEB_ANIMATIONS_FEATURE)
    }

    fn log_error(&self, message: &str) {
        error!(target: "plinth_browser::console", url = %self.env.url, "{message}");
    }
}

/// Holds the adapter installed for one platform context
#[derive(Default)]
pub struct AdapterSlot {
    current: RwLock<Option<Arc<dyn DomAdapter>>>,
}

impl AdapterSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install (or replace) the adapter
    pub fn install(&self, adapter: Arc<dyn DomAdapter>) {
        info!(adapter = adapter.name(), "DOM adapter installed");
        *self.current.write() = Some(adapter);
    }

    pub fn is_installed(&self) -> bool {
        self.current.read().is_some()
    }

    /// The installed adapter
    pub fn current(&self) -> Result<Arc<dyn DomAdapter>> {
        self.current.read().clone().ok_or_else(|| {
            Error::configuration("No DOM adapter installed; the browser platform is not initialized")
        })
    }
}

impl std::fmt::Debug for AdapterSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterSlot")
            .field("installed", &self.is_installed())
            .finish()
    }
}

/// Platform initializer installing a [`BrowserDomAdapter`]
pub struct InstallDomAdapter {
    env: Arc<EnvironmentSnapshot>,
    slot: Arc<AdapterSlot>,
}

impl InstallDomAdapter {
    pub fn new(env: Arc<EnvironmentSnapshot>, slot: Arc<AdapterSlot>) -> Self {
        Self { env, slot }
    }
}

impl InitializerAction for InstallDomAdapter {
    fn name(&self) -> &str {
        INSTALL_DOM_ADAPTER
    }

    fn run(&self) -> Result<()> {
        self.slot
            .install(Arc::new(BrowserDomAdapter::new(self.env.as_ref().clone())));
        Ok(())
    }
}
