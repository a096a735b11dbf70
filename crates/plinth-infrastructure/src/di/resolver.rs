//! Resolver
//!
//! Turns bindings into instances for one context.
//!
//! ```text
//! resolve(id)
//!     │
//!     ├── singleton cache hit ───────────────► instance
//!     │
//!     ├── construction lock (re-entrant, per context)
//!     ├── path.enter(id)  ── id already on path ──► CyclicDependency
//!     ├── strategy:
//!     │     UseValue     → the value
//!     │     UseExisting  → resolve(target) [→ adapt]
//!     │     UseFactory   → resolve deps → factory(deps)
//!     │     UseClass     → resolve deps → constructor(deps)
//!     ├── path.exit()
//!     └── cache (singletons only) ───────────► instance
//! ```
//!
//! Cached reads never take the construction lock. First-time construction is
//! serialized per context so a singleton is built at most once even when a
//! ready context is shared between threads. The lock is re-entrant because
//! construction recurses into dependency resolution on the same thread.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::ReentrantMutex;
use plinth_domain::error::{Error, Result};
use plinth_domain::value_objects::{
    Binding, Dependency, Deps, Instance, Lifetime, ResolvedDependency, ServiceIdentity, Strategy,
};
use tracing::trace;

use super::registry::BindingRegistry;

/// A resolution scope a resolver can delegate unknown identities to
pub trait Scope: Send + Sync {
    /// Whether the scope (or one of its ancestors) binds the identity
    fn is_bound(&self, identity: ServiceIdentity) -> bool;

    /// The non-multi binding that serves the identity in this scope chain
    fn lookup_binding(&self, identity: ServiceIdentity) -> Option<&Binding>;

    /// Resolve a single instance
    fn resolve_identity(&self, identity: ServiceIdentity) -> Result<Instance>;

    /// Resolve a multi-binding sequence
    fn resolve_all_identity(&self, identity: ServiceIdentity) -> Result<Vec<Instance>>;
}

/// Identities currently being constructed by one resolution call
#[derive(Debug, Default)]
pub struct ResolutionPath {
    stack: Vec<ServiceIdentity>,
}

impl ResolutionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an identity, failing if it is already in progress
    pub fn enter(&mut self, identity: ServiceIdentity) -> Result<()> {
        if let Some(start) = self.stack.iter().position(|&id| id == identity) {
            let cycle = self.stack[start..]
                .iter()
                .chain(std::iter::once(&identity))
                .map(|id| id.name());
            return Err(Error::cyclic_dependency(cycle));
        }
        self.stack.push(identity);
        Ok(())
    }

    /// Pop the innermost identity
    pub fn exit(&mut self) {
        self.stack.pop();
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Produces instances from a [`BindingRegistry`] with singleton caching
pub struct Resolver {
    registry: BindingRegistry,
    pub(crate) singletons: DashMap<ServiceIdentity, Instance>,
    pub(crate) sequences: DashMap<ServiceIdentity, Vec<Instance>>,
    pub(crate) construction: ReentrantMutex<()>,
    pub(crate) parent: Option<Arc<dyn Scope>>,
}

impl Resolver {
    /// Resolver over a registry without a parent scope
    pub fn new(registry: BindingRegistry) -> Self {
        Self {
            registry,
            singletons: DashMap::new(),
            sequences: DashMap::new(),
            construction: ReentrantMutex::new(()),
            parent: None,
        }
    }

    /// Delegate identities this resolver cannot satisfy to `parent`
    pub fn with_parent(mut self, parent: Arc<dyn Scope>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn registry(&self) -> &BindingRegistry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut BindingRegistry {
        &mut self.registry
    }

    /// Whether this resolver or its parent binds the identity
    pub fn is_bound(&self, identity: ServiceIdentity) -> bool {
        self.registry.contains(identity)
            || self
                .parent
                .as_ref()
                .is_some_and(|parent| parent.is_bound(identity))
    }

    /// Number of cached singletons
    pub fn cached_count(&self) -> usize {
        self.singletons.len()
    }

    /// Resolve a single instance
    pub fn resolve(&self, identity: ServiceIdentity) -> Result<Instance> {
        let mut path = ResolutionPath::new();
        self.resolve_in(identity, &mut path)
    }

    /// Resolve a single instance, `None` when nothing binds the identity
    pub fn resolve_optional(&self, identity: ServiceIdentity) -> Result<Option<Instance>> {
        if !self.is_bound(identity) {
            return Ok(None);
        }
        self.resolve(identity).map(Some)
    }

    pub(crate) fn resolve_in(
        &self,
        identity: ServiceIdentity,
        path: &mut ResolutionPath,
    ) -> Result<Instance> {
        if let Some(hit) = self.singletons.get(&identity) {
            return Ok(hit.value().clone());
        }

        let binding = match self.registry.lookup(identity) {
            Ok(binding) => binding,
            Err(err) if err.is_unknown_identity() => {
                if self.registry.is_multi(identity) {
                    return Err(Error::configuration(format!(
                        "{identity} only has multi bindings; resolve it as a sequence"
                    )));
                }
                return match &self.parent {
                    Some(parent) => parent.resolve_identity(identity),
                    None => Err(err),
                };
            }
            Err(err) => return Err(err),
        };

        let _guard = self.construction.lock();
        if let Some(hit) = self.singletons.get(&identity) {
            return Ok(hit.value().clone());
        }

        path.enter(identity)?;
        trace!(identity = %identity, strategy = binding.strategy().kind(), depth = path.depth(), "Constructing");
        let produced = self.construct(binding, path);
        path.exit();
        let instance = produced?;

        if binding.lifetime() == Lifetime::Singleton {
            self.singletons.insert(identity, instance.clone());
        }
        Ok(instance)
    }

    /// Produce an instance from one binding's strategy
    pub(crate) fn construct(&self, binding: &Binding, path: &mut ResolutionPath) -> Result<Instance> {
        match binding.strategy() {
            Strategy::UseValue(value) => Ok(value.clone()),
            Strategy::UseExisting { target, adapt } => {
                let instance = self.resolve_in(*target, path)?;
                match adapt {
                    Some(adapt) => adapt(instance),
                    None => Ok(instance),
                }
            }
            Strategy::UseFactory { factory, deps } => {
                let deps = self.resolve_deps(deps, path)?;
                factory(&deps)
            }
            Strategy::UseClass(ctor) => {
                let deps = self.resolve_deps(ctor.dependencies(), path)?;
                ctor.construct(&deps)
            }
        }
    }

    fn resolve_deps(&self, deps: &[Dependency], path: &mut ResolutionPath) -> Result<Deps> {
        let mut resolved = Vec::with_capacity(deps.len());
        for dep in deps {
            let value = match *dep {
                Dependency::One(id) => ResolvedDependency::One(id, self.resolve_in(id, path)?),
                Dependency::All(id) => {
                    ResolvedDependency::All(id, self.resolve_all_in(id, path, true)?)
                }
                Dependency::Optional(id) => {
                    let instance = if self.is_bound(id) {
                        Some(self.resolve_in(id, path)?)
                    } else {
                        None
                    };
                    ResolvedDependency::Optional(id, instance)
                }
            };
            resolved.push(value);
        }
        Ok(Deps::new(resolved))
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", &self.registry)
            .field("singletons", &self.singletons.len())
            .field("sequences", &self.sequences.len())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}
