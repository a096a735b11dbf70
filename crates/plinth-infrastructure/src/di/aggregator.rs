//! Multi-Binding Aggregator
//!
//! Resolves every multi-binding registered for an identity into one ordered
//! sequence. Order is registration order, always: plugin-chain consumers rely
//! on it to decide which entry is asked first.
//!
//! Each entry is constructed independently through its own strategy. The
//! finished sequence is cached for the context unless one of its entries is
//! transient.

use plinth_domain::error::Result;
use plinth_domain::value_objects::{Instance, Lifetime, ServiceIdentity};
use tracing::debug;

use super::resolver::{ResolutionPath, Resolver};

impl Resolver {
    /// Resolve every multi-binding for the identity, in registration order
    ///
    /// An identity with no multi-bindings resolves to an empty sequence
    /// (after consulting the parent scope, if any).
    pub fn resolve_all(&self, identity: ServiceIdentity) -> Result<Vec<Instance>> {
        let mut path = ResolutionPath::new();
        self.resolve_all_in(identity, &mut path, true)
    }

    /// Resolve only the multi-bindings registered in this resolver
    ///
    /// Used for per-context collections such as platform initializers, which
    /// must never pick up a parent's entries.
    pub fn resolve_all_local(&self, identity: ServiceIdentity) -> Result<Vec<Instance>> {
        let mut path = ResolutionPath::new();
        self.resolve_all_in(identity, &mut path, false)
    }

    pub(crate) fn resolve_all_in(
        &self,
        identity: ServiceIdentity,
        path: &mut ResolutionPath,
        delegate: bool,
    ) -> Result<Vec<Instance>> {
        if let Some(hit) = self.sequences.get(&identity) {
            return Ok(hit.value().clone());
        }

        let bindings = self.registry().lookup_all(identity);
        if bindings.is_empty() {
            return match &self.parent {
                Some(parent) if delegate => parent.resolve_all_identity(identity),
                _ => Ok(Vec::new()),
            };
        }

        let _guard = self.construction.lock();
        if let Some(hit) = self.sequences.get(&identity) {
            return Ok(hit.value().clone());
        }

        path.enter(identity)?;
        let mut instances = Vec::with_capacity(bindings.len());
        for binding in &bindings {
            match self.construct(binding, path) {
                Ok(instance) => instances.push(instance),
                Err(err) => {
                    path.exit();
                    return Err(err);
                }
            }
        }
        path.exit();

        let cacheable = bindings
            .iter()
            .all(|binding| binding.lifetime() == Lifetime::Singleton);
        if cacheable {
            self.sequences.insert(identity, instances.clone());
        }

        debug!(identity = %identity, entries = instances.len(), "Resolved multi-binding sequence");
        Ok(instances)
    }
}
