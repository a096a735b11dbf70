//! # Plinth Domain
//!
//! Core types of the platform composition layer: service identities and
//! tokens, the binding model, errors, and the ports the composition engine
//! calls out to (capability probes, initializer actions, override audit).
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Identities, tokens, bindings, environment snapshot |
//! | [`ports`] | Probe, initializer, audit and composition-unit traits |
//! | [`tokens`] | Reserved identities understood by the engine |
//! | [`error`] | Error taxonomy and `Result` alias |

pub mod constants;
pub mod error;
pub mod ports;
pub mod tokens;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{Binding, Dependency, Deps, Injectable, ServiceIdentity, Token};
