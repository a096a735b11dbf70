//! Binding model
//!
//! A [`Binding`] maps a [`ServiceIdentity`] to exactly one construction
//! [`Strategy`]. Bindings are plain data: the registry stores them in
//! declaration order and the resolver interprets them.
//!
//! Typed bindings are created from a [`Token`]:
//!
//! ```
//! use std::sync::Arc;
//! use plinth_domain::value_objects::{Dependency, Token};
//!
//! let greeting: Token<String> = Token::new("Greeting");
//! let shout: Token<String> = Token::new("Shout");
//!
//! let value = greeting.use_value(Arc::new("hello".to_string()));
//! let factory = shout.use_factory(vec![Dependency::one(&greeting)], move |deps| {
//!     Ok(Arc::new(deps.get(&greeting)?.to_uppercase()))
//! });
//! assert_eq!(value.strategy().kind(), "value");
//! assert_eq!(factory.strategy().dependencies().len(), 1);
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use super::identity::{ServiceIdentity, Token};
use super::instance::{Instance, downcast_instance, into_instance};
use crate::constants::UNSPECIFIED_ORIGIN;
use crate::error::{Error, Result};

/// Factory closure over resolved dependencies
pub type FactoryFn = Arc<dyn Fn(&Deps) -> Result<Instance> + Send + Sync>;

/// Converts the target instance of an alias into the alias's own type
pub type AdaptFn = Arc<dyn Fn(Instance) -> Result<Instance> + Send + Sync>;

/// Declared dependency of a class or factory binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// A single resolved instance
    One(ServiceIdentity),
    /// The ordered multi-binding sequence
    All(ServiceIdentity),
    /// A single instance, absent when nothing is bound
    Optional(ServiceIdentity),
}

impl Dependency {
    /// Depend on a single instance
    pub fn one<T: ?Sized>(token: &Token<T>) -> Self {
        Self::One(token.identity())
    }

    /// Depend on every multi-binding registered for the token
    pub fn all<T: ?Sized>(token: &Token<T>) -> Self {
        Self::All(token.identity())
    }

    /// Depend on a single instance that may be unbound
    pub fn optional<T: ?Sized>(token: &Token<T>) -> Self {
        Self::Optional(token.identity())
    }

    /// Identity this dependency refers to
    pub fn identity(&self) -> ServiceIdentity {
        match self {
            Self::One(id) | Self::All(id) | Self::Optional(id) => *id,
        }
    }
}

/// A dependency after resolution
#[derive(Clone)]
pub enum ResolvedDependency {
    /// Resolved single instance
    One(ServiceIdentity, Instance),
    /// Resolved multi-binding sequence
    All(ServiceIdentity, Vec<Instance>),
    /// Resolved optional instance
    Optional(ServiceIdentity, Option<Instance>),
}

impl ResolvedDependency {
    fn identity(&self) -> ServiceIdentity {
        match self {
            Self::One(id, _) | Self::All(id, _) | Self::Optional(id, _) => *id,
        }
    }
}

/// Resolved dependencies handed to a factory or constructor
#[derive(Clone, Default)]
pub struct Deps {
    resolved: Vec<ResolvedDependency>,
}

impl Deps {
    /// Wrap resolved dependencies in declaration order
    pub fn new(resolved: Vec<ResolvedDependency>) -> Self {
        Self { resolved }
    }

    /// Number of declared dependencies
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// Whether no dependencies were declared
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    fn find(&self, identity: ServiceIdentity) -> Result<&ResolvedDependency> {
        self.resolved
            .iter()
            .find(|dep| dep.identity() == identity)
            .ok_or_else(|| {
                Error::configuration(format!("{identity} was not declared as a dependency"))
            })
    }

    /// Typed single dependency
    pub fn get<T>(&self, token: &Token<T>) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let identity = token.identity();
        match self.find(identity)? {
            ResolvedDependency::One(_, instance)
            | ResolvedDependency::Optional(_, Some(instance)) => {
                downcast_instance(instance, identity)
            }
            ResolvedDependency::Optional(_, None) => Err(Error::unknown_identity(identity.name())),
            ResolvedDependency::All(..) => Err(Error::configuration(format!(
                "{identity} was declared as a multi dependency"
            ))),
        }
    }

    /// Typed multi dependency, in registration order
    pub fn get_all<T>(&self, token: &Token<T>) -> Result<Vec<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let identity = token.identity();
        match self.find(identity)? {
            ResolvedDependency::All(_, instances) => instances
                .iter()
                .map(|instance| downcast_instance(instance, identity))
                .collect(),
            _ => Err(Error::configuration(format!(
                "{identity} was not declared as a multi dependency"
            ))),
        }
    }

    /// Typed optional dependency
    pub fn get_optional<T>(&self, token: &Token<T>) -> Result<Option<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let identity = token.identity();
        match self.find(identity)? {
            ResolvedDependency::Optional(_, None) => Ok(None),
            ResolvedDependency::One(_, instance)
            | ResolvedDependency::Optional(_, Some(instance)) => {
                downcast_instance(instance, identity).map(Some)
            }
            ResolvedDependency::All(..) => Err(Error::configuration(format!(
                "{identity} was declared as a multi dependency"
            ))),
        }
    }
}

/// A type the resolver can construct from declared dependencies
pub trait Injectable: Send + Sync + Sized + 'static {
    /// Dependencies resolved before `construct` is called
    fn dependencies() -> Vec<Dependency> {
        Vec::new()
    }

    /// Build the instance
    fn construct(deps: &Deps) -> Result<Self>;
}

/// Constructor descriptor for `UseClass`
#[derive(Clone)]
pub struct ClassCtor {
    type_name: &'static str,
    deps: Vec<Dependency>,
    construct: FactoryFn,
}

impl ClassCtor {
    /// Concrete type constructed
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Declared dependencies
    pub fn dependencies(&self) -> &[Dependency] {
        &self.deps
    }

    /// Run the constructor
    pub fn construct(&self, deps: &Deps) -> Result<Instance> {
        (self.construct)(deps)
    }
}

/// Construction strategy of a binding
#[derive(Clone)]
pub enum Strategy {
    /// Construct through an [`Injectable`] type
    UseClass(ClassCtor),
    /// Alias another identity
    UseExisting {
        /// Identity resolved in place of this one
        target: ServiceIdentity,
        /// Conversion to this binding's type, when the types differ
        adapt: Option<AdaptFn>,
    },
    /// Invoke a factory with resolved dependencies
    UseFactory {
        /// Factory closure
        factory: FactoryFn,
        /// Dependencies resolved before the call
        deps: Vec<Dependency>,
    },
    /// Fixed value, never constructed
    UseValue(Instance),
}

impl Strategy {
    /// Short name of the strategy kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UseClass(_) => "class",
            Self::UseExisting { .. } => "existing",
            Self::UseFactory { .. } => "factory",
            Self::UseValue(_) => "value",
        }
    }

    /// Every identity this strategy needs resolved first
    pub fn dependencies(&self) -> Vec<Dependency> {
        match self {
            Self::UseClass(ctor) => ctor.deps.clone(),
            Self::UseExisting { target, .. } => vec![Dependency::One(*target)],
            Self::UseFactory { deps, .. } => deps.clone(),
            Self::UseValue(_) => Vec::new(),
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UseClass(ctor) => f.debug_tuple("UseClass").field(&ctor.type_name).finish(),
            Self::UseExisting { target, adapt } => f
                .debug_struct("UseExisting")
                .field("target", target)
                .field("adapted", &adapt.is_some())
                .finish(),
            Self::UseFactory { deps, .. } => {
                f.debug_struct("UseFactory").field("deps", deps).finish()
            }
            Self::UseValue(_) => f.write_str("UseValue"),
        }
    }
}

/// How long a produced instance lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifetime {
    /// One instance per context
    #[default]
    Singleton,
    /// A fresh instance on every resolution
    Transient,
}

/// Declarative rule mapping an identity to a construction strategy
#[derive(Clone, Debug)]
pub struct Binding {
    identity: ServiceIdentity,
    strategy: Strategy,
    multi: bool,
    lifetime: Lifetime,
    origin: &'static str,
    sensitive: bool,
    trusted_override: bool,
}

impl Binding {
    /// Create a single, singleton binding
    pub fn new(identity: ServiceIdentity, strategy: Strategy) -> Self {
        Self {
            identity,
            strategy,
            multi: false,
            lifetime: Lifetime::Singleton,
            origin: UNSPECIFIED_ORIGIN,
            sensitive: false,
            trusted_override: false,
        }
    }

    /// Tag the binding to be collected alongside others for its identity
    #[must_use]
    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    /// Construct a fresh instance on every resolution
    #[must_use]
    pub fn transient(mut self) -> Self {
        self.lifetime = Lifetime::Transient;
        self
    }

    /// Mark the binding as security sensitive; replacing it requires a trusted override
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Record the composition unit that declared this binding
    #[must_use]
    pub fn with_origin(mut self, origin: &'static str) -> Self {
        self.origin = origin;
        self
    }

    /// Flag the binding as an explicit, audited replacement
    #[must_use]
    pub fn trusted_override(mut self) -> Self {
        self.trusted_override = true;
        self
    }

    pub fn identity(&self) -> ServiceIdentity {
        self.identity
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    pub fn origin(&self) -> &'static str {
        self.origin
    }

    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    pub fn is_trusted_override(&self) -> bool {
        self.trusted_override
    }
}

// Typed binding constructors
impl<T> Token<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    /// Bind a fixed value
    pub fn use_value(&self, value: Arc<T>) -> Binding {
        Binding::new(self.identity(), Strategy::UseValue(into_instance(value)))
    }

    /// Bind an [`Injectable`] type, upcast to the token's type
    pub fn use_class<C: Injectable>(&self, upcast: fn(Arc<C>) -> Arc<T>) -> Binding {
        let construct: FactoryFn = Arc::new(move |deps: &Deps| {
            let concrete = Arc::new(C::construct(deps)?);
            Ok(into_instance(upcast(concrete)))
        });
        Binding::new(
            self.identity(),
            Strategy::UseClass(ClassCtor {
                type_name: type_name::<C>(),
                deps: C::dependencies(),
                construct,
            }),
        )
    }

    /// Bind a factory over declared dependencies
    pub fn use_factory<F>(&self, deps: Vec<Dependency>, factory: F) -> Binding
    where
        F: Fn(&Deps) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        let factory: FactoryFn = Arc::new(move |deps: &Deps| factory(deps).map(into_instance));
        Binding::new(self.identity(), Strategy::UseFactory { factory, deps })
    }

    /// Alias another token of the same type
    pub fn use_existing(&self, target: &Token<T>) -> Binding {
        Binding::new(
            self.identity(),
            Strategy::UseExisting {
                target: target.identity(),
                adapt: None,
            },
        )
    }

    /// Alias a token of another type, converting its instance
    pub fn use_existing_as<U>(&self, target: &Token<U>, upcast: fn(Arc<U>) -> Arc<T>) -> Binding
    where
        U: ?Sized + Send + Sync + 'static,
    {
        let target_identity = target.identity();
        let adapt: AdaptFn = Arc::new(move |instance: Instance| {
            let source = downcast_instance::<U>(&instance, target_identity)?;
            Ok(into_instance(upcast(source)))
        });
        Binding::new(
            self.identity(),
            Strategy::UseExisting {
                target: target_identity,
                adapt: Some(adapt),
            },
        )
    }
}
