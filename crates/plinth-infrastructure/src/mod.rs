//! # Infrastructure Layer
//!
//! The composition engine plus the cross-cutting concerns around it.
//!
//! ### Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Binding registry, resolver, contexts and platform factories |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML/env configuration via Figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context helpers for converting foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use di::{ContextBuilder, PlatformContext, PlatformFactory};
pub use error_ext::ErrorContext;
