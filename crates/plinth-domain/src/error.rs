//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the wrapping variants
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Plinth
#[derive(Error, Debug)]
pub enum Error {
    /// Resolution requested for an identity with no binding and no fallback
    #[error("No binding registered for {identity}")]
    UnknownIdentity {
        /// Display name of the requested identity
        identity: String,
    },

    /// The dependency walk revisited an identity that was still being resolved
    #[error("Cyclic dependency: {}", path.join(" -> "))]
    CyclicDependency {
        /// Identities on the resolution path, ending with the revisited one
        path: Vec<String>,
    },

    /// A capability probe raised an error instead of reporting support
    #[error("Capability probe for '{capability}' failed: {message}")]
    ProbeFailure {
        /// Capability being probed
        capability: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// A platform initializer action failed
    #[error("Platform initializer #{index} ({name}) failed: {source}")]
    InitializerFailure {
        /// Position of the action in registration order
        index: usize,
        /// Name reported by the action
        name: String,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// The produced instance does not have the type the token promises
    #[error("Type mismatch for {identity}: expected {expected}")]
    TypeMismatch {
        /// Identity that was resolved
        identity: String,
        /// Type name the caller asked for
        expected: &'static str,
    },

    /// One identity carries both multi and non-multi bindings
    #[error("Cannot mix multi and single bindings for {identity}")]
    MixedBindings {
        /// Offending identity
        identity: String,
    },

    /// A sensitive binding was replaced without the trusted-override call
    #[error("Untrusted override of sensitive binding {identity} by '{origin}'")]
    UntrustedOverride {
        /// Identity whose binding was replaced
        identity: String,
        /// Composition unit that registered the replacement
        origin: String,
    },

    /// Bindings were registered after the context left `Uninitialized`
    #[error("Binding registry is frozen: cannot register {identity} in state {state}")]
    RegistryFrozen {
        /// Identity of the rejected binding
        identity: String,
        /// Lifecycle state at the time of the attempt
        state: String,
    },

    /// Resolution requested before the platform initializers completed
    #[error("Context '{context}' is not ready (state: {state})")]
    ContextNotReady {
        /// Context name
        context: String,
        /// Lifecycle state at the time of the attempt
        state: String,
    },

    /// The context failed during initialization and must be discarded
    #[error("Context '{context}' failed during initialization and must be discarded")]
    ContextFailed {
        /// Context name
        context: String,
    },

    /// No plugin in the chain claimed an event
    #[error("No event manager plugin supports event '{event}'")]
    NoPluginForEvent {
        /// Event name that nobody claimed
        event: String,
    },

    /// A value was rejected by sanitization for its security context
    #[error("Unsafe value in {context} context: {message}")]
    UnsafeValue {
        /// Security context the value was used in
        context: String,
        /// Why the value was rejected
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an unknown identity error
    pub fn unknown_identity<S: Into<String>>(identity: S) -> Self {
        Self::UnknownIdentity {
            identity: identity.into(),
        }
    }

    /// Create a cyclic dependency error from the resolution path
    pub fn cyclic_dependency<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CyclicDependency {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>>(identity: S, expected: &'static str) -> Self {
        Self::TypeMismatch {
            identity: identity.into(),
            expected,
        }
    }

    /// Create a probe failure without a source error
    pub fn probe_failure<C: Into<String>, M: Into<String>>(capability: C, message: M) -> Self {
        Self::ProbeFailure {
            capability: capability.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an unsafe value error
    pub fn unsafe_value<C: Into<String>, M: Into<String>>(context: C, message: M) -> Self {
        Self::UnsafeValue {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Wrap an initializer failure with its position and name
    pub fn initializer_failure<S: Into<String>>(index: usize, name: S, source: Error) -> Self {
        Self::InitializerFailure {
            index,
            name: name.into(),
            source: Box::new(source),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Whether this error is the "nothing bound" kind that caller fallbacks absorb
    pub fn is_unknown_identity(&self) -> bool {
        matches!(self, Self::UnknownIdentity { .. })
    }
}
