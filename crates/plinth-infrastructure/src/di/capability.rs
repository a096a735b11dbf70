//! Capability Selector
//!
//! A binding strategy with no static target type. At resolution it probes the
//! [`EnvironmentSnapshot`] bound under [`ENVIRONMENT`] and returns one member
//! of a closed set of implementations:
//!
//! ```text
//! probe(env) ── Ok(Supported(tag)) ──► implementation registered for tag
//!            ── Ok(Unsupported)    ──► no-op implementation
//!            ── Err(_)             ──► ProbeFailure (fatal)
//! ```
//!
//! The selector is bound as a singleton factory, so the probe runs at most
//! once per context.

use std::sync::Arc;

use plinth_domain::constants::NOOP_CAPABILITY_TAG;
use plinth_domain::error::{Error, Result};
use plinth_domain::ports::CapabilityProbe;
use plinth_domain::tokens::ENVIRONMENT;
use plinth_domain::value_objects::{
    Binding, CapabilityTag, Dependency, EnvironmentSnapshot, ProbeOutcome, Token,
};
use tracing::info;

type Constructor<T> = Arc<dyn Fn() -> Arc<T> + Send + Sync>;

/// Chooses an implementation of `T` from an environment probe
pub struct CapabilitySelector<T: ?Sized> {
    probe: Arc<dyn CapabilityProbe>,
    implementations: Vec<(CapabilityTag, Constructor<T>)>,
    fallback: Constructor<T>,
}

impl<T> CapabilitySelector<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    /// Selector with a probe and the no-op implementation used when unsupported
    pub fn new<P, F>(probe: P, fallback: F) -> Self
    where
        P: CapabilityProbe + 'static,
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        Self {
            probe: Arc::new(probe),
            implementations: Vec::new(),
            fallback: Arc::new(fallback),
        }
    }

    /// Register the implementation used when the probe reports `tag`
    #[must_use]
    pub fn with_implementation<F>(mut self, tag: impl Into<CapabilityTag>, constructor: F) -> Self
    where
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        self.implementations.push((tag.into(), Arc::new(constructor)));
        self
    }

    /// Capability name reported by the probe
    pub fn capability(&self) -> &str {
        self.probe.capability()
    }

    /// Tags of the registered implementations, in registration order
    pub fn tags(&self) -> Vec<&CapabilityTag> {
        self.implementations.iter().map(|(tag, _)| tag).collect()
    }

    /// Run the probe and pick an implementation
    pub fn select(&self, env: &EnvironmentSnapshot) -> Result<(CapabilityTag, Arc<T>)> {
        let outcome = self.probe.probe(env).map_err(|err| match err {
            Error::ProbeFailure { .. } => err,
            other => Error::ProbeFailure {
                capability: self.capability().to_string(),
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        })?;

        match outcome {
            ProbeOutcome::Unsupported => Ok((
                CapabilityTag::from_static(NOOP_CAPABILITY_TAG),
                (self.fallback)(),
            )),
            ProbeOutcome::Supported(tag) => {
                let constructor = self
                    .implementations
                    .iter()
                    .find(|(known, _)| *known == tag)
                    .map(|(_, constructor)| constructor)
                    .ok_or_else(|| {
                        Error::configuration(format!(
                            "Capability '{}' reported tag '{}' with no registered implementation",
                            self.capability(),
                            tag
                        ))
                    })?;
                Ok((tag, constructor()))
            }
        }
    }

    /// Bind the selector under `token` as a singleton factory over [`ENVIRONMENT`]
    pub fn bind(self, token: &Token<T>) -> Binding {
        self.bind_with(token, &*ENVIRONMENT, |env: &EnvironmentSnapshot| Ok(env.clone()))
    }

    /// Bind the selector under `token`, probing the snapshot `view` derives from `source`
    ///
    /// Lets a platform answer capability queries from a service that only
    /// becomes usable after one of its initializers has run.
    pub fn bind_with<S, V>(self, token: &Token<T>, source: &Token<S>, view: V) -> Binding
    where
        S: ?Sized + Send + Sync + 'static,
        V: Fn(&S) -> Result<EnvironmentSnapshot> + Send + Sync + 'static,
    {
        let selector = Arc::new(self);
        let source = *source;
        token.use_factory(vec![Dependency::one(&source)], move |deps| {
            let env = view(deps.get(&source)?.as_ref())?;
            let (tag, implementation) = selector.select(&env)?;
            info!(
                capability = selector.capability(),
                selected = %tag,
                "Capability implementation selected"
            );
            Ok(implementation)
        })
    }
}
