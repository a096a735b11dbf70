//! Capability probe boundary
//!
//! A probe inspects an [`EnvironmentSnapshot`] and reports which member of a
//! capability's implementation set applies. Probes must be deterministic for
//! a given snapshot; an `Err` means the probe itself is broken, which is
//! never the same as "unsupported".

use crate::error::Result;
use crate::value_objects::{CapabilityTag, EnvironmentSnapshot, ProbeOutcome};

/// Environment inspection supplied by the hosting environment
pub trait CapabilityProbe: Send + Sync {
    /// Capability this probe answers for
    fn capability(&self) -> &str;

    /// Inspect the environment
    fn probe(&self, env: &EnvironmentSnapshot) -> Result<ProbeOutcome>;
}

/// Probe reporting a tag when the environment lists a feature
#[derive(Debug, Clone)]
pub struct FeatureProbe {
    capability: &'static str,
    feature: &'static str,
    tag: CapabilityTag,
}

impl FeatureProbe {
    /// Supported with `tag` whenever `feature` is present
    pub fn new(capability: &'static str, feature: &'static str, tag: CapabilityTag) -> Self {
        Self {
            capability,
            feature,
            tag,
        }
    }
}

impl CapabilityProbe for FeatureProbe {
    fn capability(&self) -> &str {
        self.capability
    }

    fn probe(&self, env: &EnvironmentSnapshot) -> Result<ProbeOutcome> {
        if env.supports(self.feature) {
            Ok(ProbeOutcome::Supported(self.tag.clone()))
        } else {
            Ok(ProbeOutcome::Unsupported)
        }
    }
}

/// Probe backed by a closure
pub struct FnProbe<F> {
    capability: &'static str,
    probe: F,
}

impl<F> FnProbe<F>
where
    F: Fn(&EnvironmentSnapshot) -> Result<ProbeOutcome> + Send + Sync,
{
    pub fn new(capability: &'static str, probe: F) -> Self {
        Self { capability, probe }
    }
}

impl<F> CapabilityProbe for FnProbe<F>
where
    F: Fn(&EnvironmentSnapshot) -> Result<ProbeOutcome> + Send + Sync,
{
    fn capability(&self) -> &str {
        self.capability
    }

    fn probe(&self, env: &EnvironmentSnapshot) -> Result<ProbeOutcome> {
        (self.probe)(env)
    }
}
