//! Domain Value Objects
//!
//! Immutable values describing what gets bound and how it is resolved.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ServiceIdentity`] | Opaque, process-unique service identity |
//! | [`Token`] | Typed handle over an identity |
//! | [`Binding`] | Identity → construction strategy rule |
//! | [`Instance`] | Type-erased produced service |
//! | [`EnvironmentSnapshot`] | What the host environment supports |
//! | [`ProbeOutcome`] | Result of a capability probe |
//! | [`PlatformState`] | Lifecycle state of a composed context |

/// Binding model and strategies
pub mod binding;
/// Capability probe results
pub mod capability;
/// Environment snapshot
pub mod environment;
/// Service identities and tokens
pub mod identity;
/// Type-erased instances
pub mod instance;
/// Context lifecycle state
pub mod state;

pub use binding::{
    AdaptFn, Binding, ClassCtor, Dependency, Deps, FactoryFn, Injectable, Lifetime,
    ResolvedDependency, Strategy,
};
pub use capability::{CapabilityTag, ProbeOutcome};
pub use environment::EnvironmentSnapshot;
pub use identity::{ServiceIdentity, Token};
pub use instance::{Instance, downcast_instance, into_instance, service_address};
pub use state::PlatformState;
