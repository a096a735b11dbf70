//! Binding Registry
//!
//! Ordered store of [`Binding`]s for one context. Registration only ever
//! appends. Lookups apply the combination rules:
//!
//! - non-multi: the **last** registration for an identity wins,
//! - multi: every registration is kept, in registration order.
//!
//! Each replacement of a non-multi binding is reported to the configured
//! [`OverrideAudit`] and kept in [`BindingRegistry::overrides`]. That includes
//! shadowing a binding inherited from a parent scope.

use std::collections::HashMap;
use std::sync::Arc;

use plinth_domain::error::{Error, Result};
use plinth_domain::ports::{OverrideAudit, OverrideRecord};
use plinth_domain::value_objects::{Binding, ServiceIdentity};

use super::audit::TracingOverrideAudit;
use super::resolver::Scope;

/// Ordered binding declarations for one context
pub struct BindingRegistry {
    bindings: Vec<Binding>,
    index: HashMap<ServiceIdentity, Vec<usize>>,
    overrides: Vec<OverrideRecord>,
    audit: Arc<dyn OverrideAudit>,
}

impl BindingRegistry {
    /// Empty registry reporting overrides through tracing
    pub fn new() -> Self {
        Self::with_audit(Arc::new(TracingOverrideAudit))
    }

    /// Empty registry reporting overrides to `audit`
    pub fn with_audit(audit: Arc<dyn OverrideAudit>) -> Self {
        Self {
            bindings: Vec::new(),
            index: HashMap::new(),
            overrides: Vec::new(),
            audit,
        }
    }

    /// Append a binding
    pub fn register(&mut self, binding: Binding) {
        self.register_within(binding, None);
    }

    /// Append a binding to a registry whose context delegates to `parent`
    ///
    /// A non-multi binding that shadows one of the parent's is audited the
    /// same way as a local replacement.
    pub fn register_within(&mut self, binding: Binding, parent: Option<&dyn Scope>) {
        let identity = binding.identity();

        let replaced = if binding.is_multi() {
            None
        } else {
            self.lookup(identity)
                .ok()
                .or_else(|| parent.and_then(|scope| scope.lookup_binding(identity)))
                .map(|previous| OverrideRecord {
                    identity: identity.name().to_string(),
                    replaced_origin: previous.origin().to_string(),
                    origin: binding.origin().to_string(),
                    sensitive: previous.is_sensitive() || binding.is_sensitive(),
                    trusted: binding.is_trusted_override(),
                })
        };

        if let Some(record) = replaced {
            self.audit.record(&record);
            self.overrides.push(record);
        }

        self.index
            .entry(identity)
            .or_default()
            .push(self.bindings.len());
        self.bindings.push(binding);
    }

    /// Last non-multi binding for the identity
    pub fn lookup(&self, identity: ServiceIdentity) -> Result<&Binding> {
        self.index
            .get(&identity)
            .and_then(|positions| {
                positions
                    .iter()
                    .rev()
                    .map(|&at| &self.bindings[at])
                    .find(|binding| !binding.is_multi())
            })
            .ok_or_else(|| Error::unknown_identity(identity.name()))
    }

    /// Every multi binding for the identity, in registration order
    pub fn lookup_all(&self, identity: ServiceIdentity) -> Vec<&Binding> {
        self.index
            .get(&identity)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&at| &self.bindings[at])
                    .filter(|binding| binding.is_multi())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any binding exists for the identity
    pub fn contains(&self, identity: ServiceIdentity) -> bool {
        self.index.contains_key(&identity)
    }

    /// Whether the identity is bound as a multi-binding collection
    pub fn is_multi(&self, identity: ServiceIdentity) -> bool {
        self.index.get(&identity).is_some_and(|positions| {
            positions.iter().any(|&at| self.bindings[at].is_multi())
        })
    }

    /// Distinct identities in first-registration order
    pub fn identities(&self) -> Vec<ServiceIdentity> {
        let mut seen = Vec::new();
        for binding in &self.bindings {
            if !seen.contains(&binding.identity()) {
                seen.push(binding.identity());
            }
        }
        seen
    }

    /// All bindings in registration order
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Replacements recorded so far
    pub fn overrides(&self) -> &[OverrideRecord] {
        &self.overrides
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Check the registry before it serves resolutions
    ///
    /// Rejects identities that mix multi and non-multi bindings and, when
    /// `deny_untrusted` is set, sensitive replacements that skipped the
    /// trusted-override call.
    pub fn validate(&self, deny_untrusted: bool) -> Result<()> {
        for (identity, positions) in &self.index {
            let multi = positions
                .iter()
                .filter(|&&at| self.bindings[at].is_multi())
                .count();
            if multi != 0 && multi != positions.len() {
                return Err(Error::MixedBindings {
                    identity: identity.name().to_string(),
                });
            }
        }

        if deny_untrusted {
            if let Some(record) = self.overrides.iter().find(|record| record.is_untrusted()) {
                return Err(Error::UntrustedOverride {
                    identity: record.identity.clone(),
                    origin: record.origin.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Default for BindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BindingRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingRegistry")
            .field("bindings", &self.bindings.len())
            .field("overrides", &self.overrides.len())
            .finish()
    }
}
