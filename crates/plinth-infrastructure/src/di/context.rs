//! Platform Context - the composition root
//!
//! A [`PlatformContext`] owns one [`BindingRegistry`], the [`Resolver`] built
//! over it and an [`InitializerSequencer`]. Contexts form a tree: a child
//! delegates every identity it does not bind to its parent, never the other
//! way around.
//!
//! ## Lifecycle
//!
//! ```text
//! ContextBuilder ──assemble()──► Uninitialized ──initialize()──► Ready
//!      │                              │                  └─────► Failed
//!      └── with_unit / with_binding   └── register (allowed only here)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = ContextBuilder::new("application")
//!     .with_parent(platform.clone())
//!     .with_unit(&BrowserModule)
//!     .with_binding(GREETING.use_value(Arc::new("hello".to_string())))
//!     .build()?;
//!
//! let greeting = context.get(&GREETING)?;
//! ```

use std::sync::Arc;

use plinth_domain::constants::{DIRECT_ORIGIN, UNSPECIFIED_ORIGIN};
use plinth_domain::error::{Error, Result};
use plinth_domain::ports::{CompositionUnit, OverrideAudit};
use plinth_domain::value_objects::{
    Binding, Instance, PlatformState, ServiceIdentity, Token, downcast_instance,
};
use tracing::{debug, info};

use super::initializer::InitializerSequencer;
use super::registry::BindingRegistry;
use super::resolver::{Resolver, Scope};
use crate::config::CompositionConfig;

/// A composed, resolvable set of bindings with a lifecycle
pub struct PlatformContext {
    name: String,
    resolver: Resolver,
    sequencer: InitializerSequencer,
    parent: Option<Arc<PlatformContext>>,
    policy: CompositionConfig,
}

impl PlatformContext {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> PlatformState {
        self.sequencer.state()
    }

    pub fn parent(&self) -> Option<&Arc<PlatformContext>> {
        self.parent.as_ref()
    }

    pub fn registry(&self) -> &BindingRegistry {
        self.resolver.registry()
    }

    pub fn policy(&self) -> &CompositionConfig {
        &self.policy
    }

    /// Names of the initializers that ran, in order
    pub fn initialized_actions(&self) -> &[String] {
        self.sequencer.completed()
    }

    /// Number of singletons constructed so far
    pub fn cached_count(&self) -> usize {
        self.resolver.cached_count()
    }

    /// Append a binding; only allowed before initialization
    pub fn register(&mut self, binding: Binding) -> Result<()> {
        self.ensure_mutable(binding.identity())?;
        let parent = self.parent.as_deref().map(|parent| parent as &dyn Scope);
        self.resolver
            .registry_mut()
            .register_within(with_default_origin(binding), parent);
        Ok(())
    }

    /// Append an explicit, audited replacement of an existing binding
    pub fn register_trusted_override(&mut self, binding: Binding) -> Result<()> {
        self.register(binding.trusted_override())
    }

    /// Validate the registry, run the platform initializers and become ready
    ///
    /// Idempotent once ready. A failed context stays failed.
    pub fn initialize(&mut self) -> Result<()> {
        self.sequencer.run(&self.resolver, &self.policy)
    }

    /// Resolve a service by token
    pub fn get<T>(&self, token: &Token<T>) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let instance = self.resolve(token.identity())?;
        downcast_instance(&instance, token.identity())
    }

    /// Resolve every multi-binding for a token, in registration order
    pub fn get_all<T>(&self, token: &Token<T>) -> Result<Vec<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve_all(token.identity())?
            .iter()
            .map(|instance| downcast_instance(instance, token.identity()))
            .collect()
    }

    /// Resolve a service, `None` when nothing in the context chain binds it
    pub fn get_optional<T>(&self, token: &Token<T>) -> Result<Option<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.ensure_ready()?;
        match self.resolver.resolve_optional(token.identity())? {
            Some(instance) => downcast_instance(&instance, token.identity()).map(Some),
            None => Ok(None),
        }
    }

    /// Resolve a service or fall back to `default` when it is unbound
    pub fn get_or<T>(&self, token: &Token<T>, default: Arc<T>) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Ok(self.get_optional(token)?.unwrap_or(default))
    }

    /// Resolve an untyped instance
    pub fn resolve(&self, identity: ServiceIdentity) -> Result<Instance> {
        self.ensure_ready()?;
        self.resolver.resolve(identity)
    }

    /// Resolve an untyped multi-binding sequence
    pub fn resolve_all(&self, identity: ServiceIdentity) -> Result<Vec<Instance>> {
        self.ensure_ready()?;
        self.resolver.resolve_all(identity)
    }

    /// Whether this context or an ancestor binds the identity
    pub fn is_bound(&self, identity: ServiceIdentity) -> bool {
        self.resolver.is_bound(identity)
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state() {
            PlatformState::Ready => Ok(()),
            PlatformState::Failed => Err(Error::ContextFailed {
                context: self.name.clone(),
            }),
            state => Err(Error::ContextNotReady {
                context: self.name.clone(),
                state: state.to_string(),
            }),
        }
    }

    fn ensure_mutable(&self, identity: ServiceIdentity) -> Result<()> {
        match self.state() {
            PlatformState::Uninitialized => Ok(()),
            state => Err(Error::RegistryFrozen {
                identity: identity.name().to_string(),
                state: state.to_string(),
            }),
        }
    }
}

impl Scope for PlatformContext {
    fn is_bound(&self, identity: ServiceIdentity) -> bool {
        PlatformContext::is_bound(self, identity)
    }

    fn lookup_binding(&self, identity: ServiceIdentity) -> Option<&Binding> {
        self.registry().lookup(identity).ok().or_else(|| {
            self.parent
                .as_ref()
                .and_then(|parent| parent.lookup_binding(identity))
        })
    }

    fn resolve_identity(&self, identity: ServiceIdentity) -> Result<Instance> {
        self.resolve(identity)
    }

    fn resolve_all_identity(&self, identity: ServiceIdentity) -> Result<Vec<Instance>> {
        self.resolve_all(identity)
    }
}

impl std::fmt::Debug for PlatformContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformContext")
            .field("name", &self.name)
            .field("state", &self.state())
            .field("parent", &self.parent.as_ref().map(|parent| parent.name()))
            .field("resolver", &self.resolver)
            .finish()
    }
}

fn with_default_origin(binding: Binding) -> Binding {
    if binding.origin() == UNSPECIFIED_ORIGIN {
        binding.with_origin(DIRECT_ORIGIN)
    } else {
        binding
    }
}

/// Builder collecting composition units and bindings for one context
pub struct ContextBuilder {
    name: String,
    pending: Vec<Binding>,
    audit: Option<Arc<dyn OverrideAudit>>,
    parent: Option<Arc<PlatformContext>>,
    policy: CompositionConfig,
}

impl ContextBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pending: Vec::new(),
            audit: None,
            parent: None,
            policy: CompositionConfig::default(),
        }
    }

    /// Report binding replacements to `audit` instead of the tracing default
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<dyn OverrideAudit>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Delegate unbound identities to a ready parent context
    #[must_use]
    pub fn with_parent(mut self, parent: Arc<PlatformContext>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Apply the start-up policy from configuration
    #[must_use]
    pub fn with_composition(mut self, policy: &CompositionConfig) -> Self {
        self.policy = policy.clone();
        self
    }

    #[must_use]
    pub fn eager(mut self, eager: bool) -> Self {
        self.policy.eager = eager;
        self
    }

    #[must_use]
    pub fn deny_untrusted_overrides(mut self, deny: bool) -> Self {
        self.policy.deny_untrusted_overrides = deny;
        self
    }

    /// Append every binding of a unit, tagged with the unit's name
    #[must_use]
    pub fn with_unit<U>(mut self, unit: &U) -> Self
    where
        U: CompositionUnit + ?Sized,
    {
        let origin = unit.name();
        let bindings = unit.bindings();
        debug!(context = %self.name, unit = origin, bindings = bindings.len(), "Adding composition unit");
        self.pending.extend(bindings.into_iter().map(|binding| {
            if binding.origin() == UNSPECIFIED_ORIGIN {
                binding.with_origin(origin)
            } else {
                binding
            }
        }));
        self
    }

    /// Append a single binding
    #[must_use]
    pub fn with_binding(mut self, binding: Binding) -> Self {
        self.pending.push(with_default_origin(binding));
        self
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: impl IntoIterator<Item = Binding>) -> Self {
        self.pending
            .extend(bindings.into_iter().map(with_default_origin));
        self
    }

    /// Append an explicit, audited replacement
    #[must_use]
    pub fn with_trusted_override(self, binding: Binding) -> Self {
        self.with_binding(binding.trusted_override())
    }

    /// Register the collected bindings into an uninitialized context
    ///
    /// Fails when the parent context is not ready.
    pub fn assemble(self) -> Result<PlatformContext> {
        if let Some(parent) = &self.parent {
            match parent.state() {
                PlatformState::Ready => {}
                PlatformState::Failed => {
                    return Err(Error::ContextFailed {
                        context: parent.name().to_string(),
                    });
                }
                state => {
                    return Err(Error::ContextNotReady {
                        context: parent.name().to_string(),
                        state: state.to_string(),
                    });
                }
            }
        }

        let mut registry = match self.audit {
            Some(audit) => BindingRegistry::with_audit(audit),
            None => BindingRegistry::new(),
        };
        let scope = self.parent.as_deref().map(|parent| parent as &dyn Scope);
        for binding in self.pending {
            registry.register_within(binding, scope);
        }

        let mut resolver = Resolver::new(registry);
        if let Some(parent) = &self.parent {
            resolver = resolver.with_parent(parent.clone() as Arc<dyn Scope>);
        }

        info!(
            context = %self.name,
            parent = self.parent.as_ref().map(|parent| parent.name()),
            bindings = resolver.registry().len(),
            "Context assembled"
        );

        Ok(PlatformContext {
            sequencer: InitializerSequencer::new(self.name.clone()),
            name: self.name,
            resolver,
            parent: self.parent,
            policy: self.policy,
        })
    }

    /// Assemble and initialize the context
    pub fn build(self) -> Result<PlatformContext> {
        let mut context = self.assemble()?;
        context.initialize()?;
        Ok(context)
    }
}
