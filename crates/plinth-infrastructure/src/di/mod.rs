//! Composition Engine
//!
//! Registry, resolver and lifecycle of platform contexts.
//!
//! ## Architecture Overview
//!
//! ```text
//! PlatformFactory (platform recipe, inheritable)
//!     └── ContextBuilder (units + bindings)
//!             └── PlatformContext
//!                     ├── BindingRegistry  (ordered declarations, override audit)
//!                     ├── Resolver         (singleton cache, cycle detection, parent delegation)
//!                     │     └── aggregator (multi-binding sequences)
//!                     └── InitializerSequencer (Uninitialized → Initializing → Ready | Failed)
//! ```
//!
//! [`CapabilitySelector`] is a binding helper: it produces a factory binding
//! that probes the environment and picks an implementation.
//!
//! ## Key Principles
//!
//! - **Trait-based DI**: services are bound and resolved as `Arc<dyn Trait>`
//! - **Last write wins**: later registrations override earlier ones, audited
//! - **Child over parent**: a child context shadows, never mutates, its parent

pub mod aggregator;
pub mod audit;
pub mod capability;
pub mod context;
pub mod initializer;
pub mod platform;
pub mod registry;
pub mod resolver;

pub use audit::{RecordingOverrideAudit, TracingOverrideAudit};
pub use capability::CapabilitySelector;
pub use context::{ContextBuilder, PlatformContext};
pub use initializer::InitializerSequencer;
pub use platform::PlatformFactory;
pub use registry::BindingRegistry;
pub use resolver::{ResolutionPath, Resolver, Scope};
