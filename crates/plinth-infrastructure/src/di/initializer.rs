//! Platform Initializer Sequencer
//!
//! Drives a context through `Uninitialized → Initializing → Ready`.
//! Entering `Initializing` resolves the context's own
//! [`PLATFORM_INITIALIZER`] multi-binding and runs each action in
//! registration order. The first failure moves the context to the terminal
//! `Failed` state; a failed context never becomes ready and is never
//! re-initialized.

use plinth_domain::error::{Error, Result};
use plinth_domain::ports::InitializerAction;
use plinth_domain::tokens::PLATFORM_INITIALIZER;
use plinth_domain::value_objects::{Lifetime, PlatformState, downcast_instance};
use tracing::{debug, error, info};

use super::resolver::Resolver;
use crate::config::CompositionConfig;
use crate::logging::log_state_transition;

/// Runs platform initializers exactly once per context
#[derive(Debug)]
pub struct InitializerSequencer {
    context: String,
    state: PlatformState,
    completed: Vec<String>,
}

impl InitializerSequencer {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            state: PlatformState::Uninitialized,
            completed: Vec::new(),
        }
    }

    pub fn state(&self) -> PlatformState {
        self.state
    }

    /// Names of the actions that completed, in the order they ran
    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    /// Run the start-up sequence: validate the registry, run every
    /// initializer, then pre-resolve singletons when the policy is eager
    ///
    /// Calling this on a ready context is a no-op; on a failed context it
    /// fails with [`Error::ContextFailed`].
    pub fn run(&mut self, resolver: &Resolver, policy: &CompositionConfig) -> Result<()> {
        match self.state {
            PlatformState::Ready => return Ok(()),
            PlatformState::Failed => {
                return Err(Error::ContextFailed {
                    context: self.context.clone(),
                });
            }
            PlatformState::Initializing => {
                return Err(Error::infrastructure(format!(
                    "Context '{}' is already initializing",
                    self.context
                )));
            }
            PlatformState::Uninitialized => {}
        }

        self.transition(PlatformState::Initializing);
        let outcome = resolver
            .registry()
            .validate(policy.deny_untrusted_overrides)
            .and_then(|()| self.run_actions(resolver))
            .and_then(|()| {
                if policy.eager {
                    pre_resolve(resolver)
                } else {
                    Ok(())
                }
            });

        match outcome {
            Ok(()) => {
                self.transition(PlatformState::Ready);
                info!(
                    context = %self.context,
                    initializers = self.completed.len(),
                    cached = resolver.cached_count(),
                    "Context ready"
                );
                Ok(())
            }
            Err(err) => {
                self.transition(PlatformState::Failed);
                error!(context = %self.context, error = %err, "Context initialization failed");
                Err(err)
            }
        }
    }

    fn run_actions(&mut self, resolver: &Resolver) -> Result<()> {
        let identity = PLATFORM_INITIALIZER.identity();
        let instances = resolver
            .resolve_all_local(identity)
            .map_err(|err| Error::initializer_failure(0, identity.name(), err))?;

        for (index, instance) in instances.iter().enumerate() {
            let action = downcast_instance::<dyn InitializerAction>(instance, identity)
                .map_err(|err| Error::initializer_failure(index, identity.name(), err))?;
            info!(context = %self.context, index, action = action.name(), "Running platform initializer");
            action
                .run()
                .map_err(|err| Error::initializer_failure(index, action.name(), err))?;
            self.completed.push(action.name().to_string());
        }
        Ok(())
    }

    fn transition(&mut self, next: PlatformState) {
        debug_assert!(self.state.can_transition_to(next));
        log_state_transition(&self.context, &self.state.to_string(), &next.to_string());
        self.state = next;
    }
}

/// Resolve every non-multi singleton of the registry
fn pre_resolve(resolver: &Resolver) -> Result<()> {
    let registry = resolver.registry();
    for identity in registry.identities() {
        if registry.is_multi(identity) {
            continue;
        }
        if registry.lookup(identity)?.lifetime() == Lifetime::Singleton {
            resolver.resolve(identity)?;
        }
    }
    debug!(cached = resolver.cached_count(), "Eagerly resolved singletons");
    Ok(())
}
