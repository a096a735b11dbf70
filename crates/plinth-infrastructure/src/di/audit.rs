//! Override audit implementations
//!
//! [`TracingOverrideAudit`] is installed by default and reports through
//! `tracing`; [`RecordingOverrideAudit`] keeps records in memory for callers
//! that want to inspect or assert on them.

use parking_lot::Mutex;
use plinth_domain::ports::{OverrideAudit, OverrideRecord};
use tracing::{debug, warn};

/// Reports overrides as tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingOverrideAudit;

impl OverrideAudit for TracingOverrideAudit {
    fn record(&self, record: &OverrideRecord) {
        if record.is_untrusted() {
            warn!(
                identity = %record.identity,
                replaced_origin = %record.replaced_origin,
                origin = %record.origin,
                "Sensitive binding replaced without a trusted override"
            );
        } else {
            debug!(
                identity = %record.identity,
                replaced_origin = %record.replaced_origin,
                origin = %record.origin,
                trusted = record.trusted,
                "Binding overridden"
            );
        }
    }
}

/// Collects override records in memory
#[derive(Debug, Default)]
pub struct RecordingOverrideAudit {
    records: Mutex<Vec<OverrideRecord>>,
}

impl RecordingOverrideAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record received so far, in registration order
    pub fn records(&self) -> Vec<OverrideRecord> {
        self.records.lock().clone()
    }

    /// Records of sensitive bindings replaced without the trusted-override call
    pub fn untrusted(&self) -> Vec<OverrideRecord> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.is_untrusted())
            .cloned()
            .collect()
    }
}

impl OverrideAudit for RecordingOverrideAudit {
    fn record(&self, record: &OverrideRecord) {
        TracingOverrideAudit.record(record);
        self.records.lock().push(record.clone());
    }
}
