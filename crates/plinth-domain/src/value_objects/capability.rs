//! Capability probe results

use std::borrow::Cow;
use std::fmt;

/// Name of one implementation in a capability's closed set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapabilityTag(Cow<'static, str>);

impl CapabilityTag {
    /// Tag from a static name
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Tag name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for CapabilityTag {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for CapabilityTag {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for CapabilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a probe reports about a capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Supported; use the implementation registered under the tag
    Supported(CapabilityTag),
    /// Not supported; use the no-op implementation
    Unsupported,
}

impl ProbeOutcome {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }
}
