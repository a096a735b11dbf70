//! Domain layer constants

// ============================================================================
// COMPOSITION CONSTANTS
// ============================================================================

/// Origin of a binding nobody tagged
pub const UNSPECIFIED_ORIGIN: &str = "<unspecified>";

/// Origin recorded for bindings appended directly to a context
pub const DIRECT_ORIGIN: &str = "direct";

/// Origin recorded for bindings supplied by a platform factory caller
pub const EXTRA_ORIGIN: &str = "extra";

/// Name of the root platform
pub const CORE_PLATFORM_NAME: &str = "core";

// ============================================================================
// CAPABILITY CONSTANTS
// ============================================================================

/// Tag reported for the no-op implementation of any capability
pub const NOOP_CAPABILITY_TAG: &str = "noop";
