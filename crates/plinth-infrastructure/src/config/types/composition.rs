//! Composition policy types

use serde::{Deserialize, Serialize};

/// How contexts are composed and started
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    /// Resolve every singleton during start-up instead of on first use
    pub eager: bool,

    /// Install the element probe (debug root renderer) in application contexts
    pub debug_probe: bool,

    /// Reject sensitive overrides that skip the trusted-override call
    pub deny_untrusted_overrides: bool,
}
