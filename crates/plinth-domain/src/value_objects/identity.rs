//! Service identities and typed tokens
//!
//! A [`ServiceIdentity`] is an opaque, process-unique token. Two identities
//! are equal only when they come from the same `ServiceIdentity::new` call;
//! the name is carried for diagnostics and never compared.
//!
//! [`Token<T>`] pins the service type produced under an identity so that
//! registration and resolution stay typed while the registry itself works on
//! untyped [`Instance`](super::Instance) values.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Opaque, globally unique service identity
#[derive(Clone, Copy)]
pub struct ServiceIdentity {
    id: u64,
    name: &'static str,
}

impl ServiceIdentity {
    /// Allocate a fresh identity
    pub fn new(name: &'static str) -> Self {
        Self {
            id: NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed),
            name,
        }
    }

    /// Diagnostic name given at creation
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Process-unique numeric id
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl PartialEq for ServiceIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceIdentity {}

impl Hash for ServiceIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

impl fmt::Display for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Typed handle over a [`ServiceIdentity`]
///
/// `T` is the service type handed out on resolution, usually a trait object:
///
/// ```
/// use plinth_domain::value_objects::Token;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// let token: Token<dyn Greeter> = Token::new("Greeter");
/// assert_eq!(token.identity().name(), "Greeter");
/// ```
pub struct Token<T: ?Sized> {
    identity: ServiceIdentity,
    _marker: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized> Token<T> {
    /// Create a token with a fresh identity
    pub fn new(name: &'static str) -> Self {
        Self {
            identity: ServiceIdentity::new(name),
            _marker: PhantomData,
        }
    }

    /// Untyped identity behind this token
    pub fn identity(&self) -> ServiceIdentity {
        self.identity
    }
}

impl<T: ?Sized> Clone for Token<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Token<T> {}

impl<T: ?Sized> PartialEq for Token<T> {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl<T: ?Sized> Eq for Token<T> {}

impl<T: ?Sized> fmt::Debug for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&self.identity).finish()
    }
}

impl<T: ?Sized> From<Token<T>> for ServiceIdentity {
    fn from(token: Token<T>) -> Self {
        token.identity
    }
}

impl<T: ?Sized> From<&Token<T>> for ServiceIdentity {
    fn from(token: &Token<T>) -> Self {
        token.identity
    }
}
