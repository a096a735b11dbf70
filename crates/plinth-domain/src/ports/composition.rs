//! Composition units

use crate::value_objects::Binding;

/// A named group of bindings contributed to a context
///
/// Units are the declaration sites of a platform: a context is composed by
/// appending the bindings of each unit in order.
pub trait CompositionUnit: Send + Sync {
    /// Name recorded as the origin of every binding
    fn name(&self) -> &'static str;

    /// Bindings in declaration order
    fn bindings(&self) -> Vec<Binding>;
}
