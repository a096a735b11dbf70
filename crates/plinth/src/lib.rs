//! # Plinth
//!
//! Hierarchical platform composition: named platforms built from composition
//! units, child contexts that delegate to their parent, platform initializers
//! and services selected by environment capability.
//!
//! ## Example
//!
//! ```ignore
//! use plinth::browser::{bootstrap_module, create_browser_platform};
//! use plinth::infrastructure::config::ConfigLoader;
//!
//! let config = ConfigLoader::new().load()?;
//! let platform = create_browser_platform(&config)?;
//! let app = bootstrap_module(&platform, &config.composition)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Binding model, tokens, ports and errors
//! - `infrastructure` - Registry, resolver, contexts, config and logging
//! - `browser` - The browser platform and its application services
//! - `cli` - The `plinth` command line

/// Domain layer - binding model and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use plinth_domain::*;
}

/// Infrastructure layer - composition engine, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use plinth_infrastructure::*;
}

/// Browser platform
///
/// Re-exports from the browser crate for convenience
pub mod browser {
    pub use plinth_browser::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use infrastructure::{ContextBuilder, PlatformContext, PlatformFactory};
