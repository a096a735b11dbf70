//! Configuration management
//!
//! Layered configuration (defaults, TOML file, environment) loaded through
//! Figment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
