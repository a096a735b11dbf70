//! Composition units of the browser platform
//!
//! | Unit | Context | Provides |
//! |------|---------|----------|
//! | [`CoreUnit`] | platform (`core`) | testability registry, adapter slot |
//! | [`BrowserPlatformUnit`] | platform (`browser`) | environment, platform initializers, location |
//! | [`BrowserModule`] | application | sanitization, document, events, renderers, animation |
//! | [`ElementProbeUnit`] | application (debug) | debug root renderer |

pub mod browser_module;
pub mod browser_platform;
pub mod element_probe;
pub mod platform_core;

pub use browser_module::BrowserModule;
pub use browser_platform::BrowserPlatformUnit;
pub use element_probe::ElementProbeUnit;
pub use platform_core::CoreUnit;
