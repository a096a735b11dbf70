//! Override audit hook
//!
//! Replacing a non-multi binding is legal (last registration wins) but must
//! stay visible. Every replacement produces an [`OverrideRecord`]; records for
//! sensitive bindings that did not go through the trusted-override call are
//! flagged as untrusted.

use serde::Serialize;

/// One replaced binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideRecord {
    /// Identity whose binding was replaced
    pub identity: String,
    /// Composition unit of the replaced binding
    pub replaced_origin: String,
    /// Composition unit of the replacement
    pub origin: String,
    /// Whether either binding was marked sensitive
    pub sensitive: bool,
    /// Whether the replacement was registered as a trusted override
    pub trusted: bool,
}

impl OverrideRecord {
    /// Sensitive replacement that skipped the trusted-override call
    pub fn is_untrusted(&self) -> bool {
        self.sensitive && !self.trusted
    }
}

/// Receives override records as bindings are registered
pub trait OverrideAudit: Send + Sync {
    fn record(&self, record: &OverrideRecord);
}
