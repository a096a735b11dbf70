//! # Plinth - Browser Platform
//!
//! The browser platform and its application-level services, declared as
//! composition units over the Plinth composition engine.
//!
//! ## Services
//!
//! | Area | Token | Implementations |
//! |------|-------|-----------------|
//! | DOM | `DOCUMENT`, `AdapterSlot` | `BrowserDomAdapter` |
//! | Security | `SanitizationService`, `DomSanitizationService` | `DomSanitizationServiceImpl` |
//! | Events | `EVENT_MANAGER_PLUGINS`, `EventManager` | DOM events, key events, gestures |
//! | Rendering | `RootRenderer`, `SharedStylesHost` | `DomRootRendererImpl`, `DebugRootRenderer` |
//! | Animation | `AnimationDriver` | Web Animations, NoOp |
//! | Testability | `Testability`, `TestabilityRegistry` | - |
//!
//! ## Usage
//!
//! ```ignore
//! use plinth_browser::platforms::{bootstrap_module, create_browser_platform};
//! use plinth_browser::tokens::ROOT_RENDERER;
//!
//! let platform = create_browser_platform(&config)?;
//! let app = bootstrap_module(&platform, &config.composition)?;
//! let renderer = app.get(&*ROOT_RENDERER)?;
//! ```

pub use plinth_domain::error::{Error, Result};

/// Browser platform constants
pub mod constants;

/// Service tokens
pub mod tokens;

/// DOM adapter, document, renderers and shared styles
pub mod dom;

/// Event manager and its plugins
pub mod events;

/// Animation drivers selected by capability
pub mod animation;

/// Sanitization services
pub mod security;

pub mod exception;
pub mod location;
pub mod testability;

/// Composition units
pub mod units;

/// Platform factories and application bootstrap
pub mod platforms;

pub use platforms::{bootstrap_module, create_browser_platform, platform_browser, platform_core};
