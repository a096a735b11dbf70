//! Domain Ports
//!
//! Interfaces the composition engine calls out to. Implementations live in
//! the infrastructure and platform crates.

/// Override audit hook
pub mod audit;
/// Capability probe boundary
pub mod capability;
/// Composition units (declarative binding groups)
pub mod composition;
/// Platform initializer actions
pub mod initializer;

pub use audit::{OverrideAudit, OverrideRecord};
pub use capability::{CapabilityProbe, FeatureProbe, FnProbe};
pub use composition::CompositionUnit;
pub use initializer::{FnInitializer, InitializerAction};
